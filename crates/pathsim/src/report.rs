//! Text and JSON rendering of simulation reports.

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use pathsim_core::config::SimulationConfig;
use pathsim_core::export::{TrialRow, trial_rows};
use pathsim_core::model::{AggregateStatistics, SensitivityPoint};
use pathsim_core::simulation::BatchOutcome;

/// Render the human-readable summary printed on stdout.
pub fn render_text(
    config: &SimulationConfig,
    batch: &BatchOutcome,
    baseline_months: f64,
    sensitivity: Option<&[SensitivityPoint]>,
) -> String {
    let stats = &batch.stats;
    let mut out = String::with_capacity(1024);

    out.push_str("Educational Pathway Duration Simulation\n");
    out.push_str("========================================\n\n");
    out.push_str(&format!(
        "Stages: {} ({} units, {} per stage)\n",
        config.stage_count(),
        config.total_units,
        config.units_per_stage
    ));
    out.push_str(&format!(
        "Disruption probability per stage: {:.2}\n",
        config.disruption_probability
    ));
    out.push_str(&format!("Start date: {}\n", config.start_date));
    out.push_str(&format!("Trials: {}\n\n", batch.results.len()));

    out.push_str(&format!(
        "Fixed pathway (baseline):  {baseline_months:>6.1} months\n"
    ));
    out.push_str(&format!(
        "Simulated mean:            {:>6.1} months\n",
        stats.mean_months
    ));
    out.push_str(&format!(
        "Simulated shortest:        {:>6.1} months\n",
        stats.min_months
    ));
    out.push_str(&format!(
        "Simulated longest:         {:>6.1} months\n",
        stats.max_months
    ));

    if let Some(points) = sensitivity {
        out.push_str("\nDisruption sensitivity\n");
        out.push_str("  probability  expected months\n");
        for point in points {
            out.push_str(&format!(
                "  {:>11.3}  {:>15.1}\n",
                point.disruption_probability, point.expected_months
            ));
        }
    }

    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    config: &'a SimulationConfig,
    stage_count: u32,
    baseline_months: f64,
    stats: &'a AggregateStatistics,
    trials: Vec<TrialRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sensitivity: Option<&'a [SensitivityPoint]>,
}

/// Render the full report as pretty JSON for downstream tooling.
pub fn render_json(
    config: &SimulationConfig,
    batch: &BatchOutcome,
    baseline_months: f64,
    sensitivity: Option<&[SensitivityPoint]>,
) -> Result<String> {
    let report = JsonReport {
        config,
        stage_count: config.stage_count(),
        baseline_months,
        stats: &batch.stats,
        trials: trial_rows(&batch.results),
        sensitivity,
    };
    serde_json::to_string_pretty(&report).wrap_err("failed to serialize report to JSON")
}
