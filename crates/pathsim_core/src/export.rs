//! Trial-level export rows.
//!
//! Any tabular serialization of a batch (CSV download, table widget) is
//! built from these rows. Run indices start at 1 and follow trial order,
//! with no gaps or duplicates; downstream consumers rely on that shape.

use serde::{Deserialize, Serialize};

use crate::model::SimulationResult;

/// One exported trial: `(run, duration_months)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialRow {
    /// 1-based run index in trial order
    pub run: usize,
    /// Completion time for that run, in months
    pub duration_months: f64,
}

/// Build export rows from batch results, one row per trial.
#[must_use]
pub fn trial_rows(results: &[SimulationResult]) -> Vec<TrialRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| TrialRow {
            run: i + 1,
            duration_months: r.duration_months,
        })
        .collect()
}
