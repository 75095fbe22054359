//! Output types produced by the simulation engine.
//!
//! All of these are transient values: constructed and consumed within a
//! single simulation request, never cached across runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Record of one stage's traversal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StageOutcome {
    /// 1-based stage index
    pub stage: u32,
    /// Units consumed by this stage
    pub units: u32,
    /// Disruption delay drawn during the teaching phase (0 when undisrupted)
    pub disruption_weeks: u32,
    /// Date the stage, including its trailing break and any special-case
    /// additions, ended
    pub end_date: Date,
}

/// One completed run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Total pathway duration in months, defined as elapsed days / 30
    pub duration_months: f64,
    /// Completion date
    pub final_date: Date,
}

/// Mean, minimum and maximum over a batch of run durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub mean_months: f64,
    pub min_months: f64,
    pub max_months: f64,
}

impl AggregateStatistics {
    /// Compute statistics over a set of durations.
    ///
    /// Returns `None` for an empty input.
    #[must_use]
    pub fn from_durations(durations: &[f64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }
        let n = durations.len() as f64;
        let mean = durations.iter().sum::<f64>() / n;
        let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
        let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean_months: mean,
            min_months: min,
            max_months: max,
        })
    }

    /// Compute statistics over the durations of a result set.
    #[must_use]
    pub fn from_results(results: &[SimulationResult]) -> Option<Self> {
        let durations: Vec<f64> = results.iter().map(|r| r.duration_months).collect();
        Self::from_durations(&durations)
    }
}

/// One point of a sensitivity sweep: the expected completion time at a given
/// disruption probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub disruption_probability: f64,
    pub expected_months: f64,
}
