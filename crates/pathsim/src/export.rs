//! CSV export of per-trial results.
//!
//! The row shape comes from the engine's trial rows: a `run,duration_months`
//! header followed by one row per trial, run indices 1..=n in trial order.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use pathsim_core::export::trial_rows;
use pathsim_core::model::SimulationResult;

/// Render per-trial results as CSV.
pub fn trials_csv(results: &[SimulationResult]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["run", "duration_months"])?;
    for row in trial_rows(results) {
        wtr.write_record([row.run.to_string(), format!("{:.4}", row.duration_months)])?;
    }

    let data = wtr.into_inner().wrap_err("failed to flush CSV writer")?;
    String::from_utf8(data).wrap_err("CSV output is not valid UTF-8")
}

/// Write the trial CSV to `path`.
pub fn write_trials_csv(path: &Path, results: &[SimulationResult]) -> Result<()> {
    let csv = trials_csv(results)?;
    std::fs::write(path, csv)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
