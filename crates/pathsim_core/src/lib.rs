//! Educational pathway duration simulation library
//!
//! This crate provides a Monte Carlo engine for comparing completion times of
//! a fixed-length intensive program against a multi-stage academic pathway
//! whose duration varies with random disruption (strike) delays. It supports:
//! - Single-run timeline generation over a fixed per-stage phase sequence
//! - Seed-reproducible Monte Carlo batches with summary statistics
//! - Disruption-probability sensitivity sweeps
//! - Per-trial export rows for tabular serialization
//!
//! # Example
//!
//! ```ignore
//! use pathsim_core::config::SimulationConfig;
//! use pathsim_core::simulation::run_batch;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let config = SimulationConfig::new(26, 4, 0.2, jiff::civil::date(2026, 2, 6))?;
//! let mut rng = SmallRng::seed_from_u64(42);
//! let batch = run_batch(&config, &mut rng, 100)?;
//! println!("mean completion: {:.1} months", batch.stats.mean_months);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod baseline;
pub mod error;
pub mod sensitivity;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod export;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use model::{AggregateStatistics, SensitivityPoint, SimulationResult, StageOutcome};
pub use simulation::{BatchOutcome, run_batch, simulate};
