//! Integration tests for the pathway simulation engine
//!
//! Tests are organized by topic:
//! - `simulation` - Timeline generation and Monte Carlo batches
//! - `sensitivity` - Disruption-probability sweeps
//! - `validation` - Configuration invariants and input bounds
//! - `export` - Trial row contract

mod simulation;
