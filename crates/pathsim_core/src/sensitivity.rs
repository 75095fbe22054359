//! Disruption-probability sensitivity sweeps.
//!
//! A sweep runs a fixed-size batch at each probability in a range and
//! records the batch mean, producing a probability → expected-duration
//! mapping in input order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::model::SensitivityPoint;
use crate::simulation::run_batch;

/// Sweep parameters: an evenly spaced probability range and a per-point
/// batch size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Lowest probability evaluated
    pub min_probability: f64,
    /// Highest probability evaluated
    pub max_probability: f64,
    /// Number of evenly spaced points, endpoints included
    pub step_count: usize,
    /// Runs per point
    pub batch_size: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_probability: 0.0,
            max_probability: 0.5,
            step_count: 10,
            batch_size: 50,
        }
    }
}

impl SweepConfig {
    /// Generate the swept probability values in ascending order.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        if self.step_count <= 1 {
            return vec![self.min_probability];
        }
        let step_size = (self.max_probability - self.min_probability) / (self.step_count - 1) as f64;
        (0..self.step_count)
            .map(|i| self.min_probability + step_size * i as f64)
            .collect()
    }
}

/// Run a batch at each probability, in input order, recording the batch
/// mean as the expected duration.
///
/// The output preserves the input probability order; it is not sorted.
/// Fails with an invalid-config error when `batch_size` is zero or a
/// probability falls outside [0, 1]; no partial result is produced.
pub fn sweep<R: Rng + ?Sized>(
    base_config: &SimulationConfig,
    rng: &mut R,
    probabilities: &[f64],
    batch_size: usize,
) -> Result<Vec<SensitivityPoint>, ConfigError> {
    if batch_size == 0 {
        return Err(ConfigError::ZeroCount {
            field: "batch_size",
        });
    }

    let mut points = Vec::with_capacity(probabilities.len());
    for &probability in probabilities {
        let config = base_config.with_disruption_probability(probability)?;
        let batch = run_batch(&config, rng, batch_size)?;
        points.push(SensitivityPoint {
            disruption_probability: probability,
            expected_months: batch.stats.mean_months,
        });
    }

    Ok(points)
}

/// Sweep over a [`SweepConfig`]'s evenly spaced points.
pub fn sweep_with_config<R: Rng + ?Sized>(
    base_config: &SimulationConfig,
    rng: &mut R,
    sweep_config: &SweepConfig,
) -> Result<Vec<SensitivityPoint>, ConfigError> {
    sweep(
        base_config,
        rng,
        &sweep_config.points(),
        sweep_config.batch_size,
    )
}
