//! Boundary validation of user-supplied parameters.
//!
//! The engine accepts any positive unit counts and a probability in [0, 1];
//! the command line enforces the tighter published input ranges before a
//! config is constructed, so a rejection names the offending field and its
//! valid range and no partial results are produced.

use std::ops::RangeInclusive;

use pathsim_core::config::bounds;
use pathsim_core::error::ConfigError;

fn check_u32(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(*range.start()),
            max: f64::from(*range.end()),
        })
    }
}

fn check_u64(
    field: &'static str,
    value: u64,
    range: &RangeInclusive<u64>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        })
    }
}

fn check_f64(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

pub fn validate_total_units(value: u32) -> Result<(), ConfigError> {
    check_u32("total_units", value, &bounds::TOTAL_UNITS)
}

pub fn validate_units_per_stage(value: u32) -> Result<(), ConfigError> {
    check_u32("units_per_stage", value, &bounds::UNITS_PER_STAGE)
}

pub fn validate_disruption_probability(value: f64) -> Result<(), ConfigError> {
    check_f64(
        "disruption_probability",
        value,
        &bounds::DISRUPTION_PROBABILITY,
    )
}

pub fn validate_trials(value: u32) -> Result<(), ConfigError> {
    check_u32("trials", value, &bounds::TRIALS)
}

pub fn validate_seed(value: u64) -> Result<(), ConfigError> {
    check_u64("seed", value, &bounds::SEED)
}

/// Validate every externally supplied parameter, failing on the first field
/// outside its published range.
pub fn validate_inputs(
    total_units: u32,
    units_per_stage: u32,
    disruption_probability: f64,
    trials: u32,
    seed: u64,
) -> Result<(), ConfigError> {
    validate_total_units(total_units)?;
    validate_units_per_stage(units_per_stage)?;
    validate_disruption_probability(disruption_probability)?;
    validate_trials(trials)?;
    validate_seed(seed)?;
    Ok(())
}
