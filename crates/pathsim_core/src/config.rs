//! Simulation configuration
//!
//! `SimulationConfig` is the immutable value passed to every engine entry
//! point. Construction validates the engine's own invariants (positive unit
//! counts, probability in [0, 1]); front ends additionally validate against
//! the tighter published input ranges in [`bounds`] before building one.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mean of the Poisson-distributed disruption delay, in weeks.
pub const DEFAULT_DELAY_MEAN_WEEKS: f64 = 2.0;

fn default_delay_mean_weeks() -> f64 {
    DEFAULT_DELAY_MEAN_WEEKS
}

/// Accepted ranges for externally supplied parameters.
///
/// The engine itself only requires positive unit counts and a probability in
/// [0, 1]; these are the tighter ranges the input boundary enforces so that
/// a rejection can name the offending field and its valid range.
pub mod bounds {
    use std::ops::RangeInclusive;

    pub const TOTAL_UNITS: RangeInclusive<u32> = 25..=40;
    pub const UNITS_PER_STAGE: RangeInclusive<u32> = 3..=6;
    pub const DISRUPTION_PROBABILITY: RangeInclusive<f64> = 0.0..=0.5;
    pub const TRIALS: RangeInclusive<u32> = 10..=500;
    pub const SEED: RangeInclusive<u64> = 0..=10_000;
}

/// Complete configuration for one simulated pathway.
///
/// Immutable once constructed; every run is a pure function of a config and
/// a random source. Use [`SimulationConfig::with_disruption_probability`] to
/// derive variants for sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Academic credit units required to complete the pathway
    pub total_units: u32,
    /// Units completed per stage
    pub units_per_stage: u32,
    /// Probability that a stage's teaching phase is disrupted
    pub disruption_probability: f64,
    /// First day of the first stage
    pub start_date: Date,
    /// Mean of the Poisson delay drawn when a stage is disrupted, in weeks
    #[serde(default = "default_delay_mean_weeks")]
    pub delay_mean_weeks: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_units: 26,
            units_per_stage: 4,
            disruption_probability: 0.2,
            start_date: jiff::civil::date(2026, 2, 6),
            delay_mean_weeks: DEFAULT_DELAY_MEAN_WEEKS,
        }
    }
}

impl SimulationConfig {
    /// Create a validated configuration with the default disruption delay
    /// model.
    pub fn new(
        total_units: u32,
        units_per_stage: u32,
        disruption_probability: f64,
        start_date: Date,
    ) -> Result<Self, ConfigError> {
        Self {
            total_units,
            units_per_stage,
            disruption_probability,
            start_date,
            delay_mean_weeks: DEFAULT_DELAY_MEAN_WEEKS,
        }
        .validated()
    }

    /// Check the engine invariants, consuming and returning the config.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.total_units == 0 {
            return Err(ConfigError::ZeroCount {
                field: "total_units",
            });
        }
        if self.units_per_stage == 0 {
            return Err(ConfigError::ZeroCount {
                field: "units_per_stage",
            });
        }
        if !(0.0..=1.0).contains(&self.disruption_probability) {
            return Err(ConfigError::OutOfRange {
                field: "disruption_probability",
                value: self.disruption_probability,
                min: 0.0,
                max: 1.0,
            });
        }
        if !self.delay_mean_weeks.is_finite() || self.delay_mean_weeks <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "delay_mean_weeks",
                value: self.delay_mean_weeks,
            });
        }
        Ok(self)
    }

    /// Number of stages needed to complete all units.
    ///
    /// The final stage may consume fewer units than a full allotment but
    /// still costs a full stage's calendar time.
    #[must_use]
    pub fn stage_count(&self) -> u32 {
        self.total_units.div_ceil(self.units_per_stage)
    }

    /// Create a variant with a different disruption probability.
    ///
    /// Used by sensitivity sweeps to derive per-point configs from a base.
    pub fn with_disruption_probability(&self, probability: f64) -> Result<Self, ConfigError> {
        Self {
            disruption_probability: probability,
            ..self.clone()
        }
        .validated()
    }
}
