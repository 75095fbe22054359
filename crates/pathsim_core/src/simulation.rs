//! Timeline generation and Monte Carlo aggregation.
//!
//! [`simulate`] advances one pathway run stage by stage from the configured
//! start date, drawing disruption delays from the supplied random source.
//! [`run_batch`] repeats it over a shared stream so that a fixed seed
//! reproduces the same duration sequence; the `parallel` feature adds
//! [`run_batch_parallel`], a rayon fan-out with per-run derived seeds.

use jiff::ToSpan;
use jiff::civil::Date;
use rand::{Rng, distr::Distribution};
use rand_distr::Poisson;

#[cfg(feature = "parallel")]
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::model::{AggregateStatistics, SimulationResult, StageOutcome};

/// Fixed sub-phase lengths of every stage, in weeks.
const ORIENTATION_WEEKS: i64 = 1;
const TEACHING_WEEKS: i64 = 12;
const ASSESSMENT_WEEKS: i64 = 2;
const EXAMINATION_WEEKS: i64 = 2;
const BREAK_WEEKS: i64 = 2;

/// Industry placement inserted before the final stage.
const PLACEMENT_WEEKS: i64 = 12;
/// Graduation processing appended to the final stage.
const GRADUATION_WEEKS: i64 = 4;
/// Capstone/attachment period appended to the final stage.
const CAPSTONE_WEEKS: i64 = 24;

/// Days per month used when converting elapsed time to months.
const DAYS_PER_MONTH: f64 = 30.0;

/// Advance a single run from the configured start date to completion.
///
/// Total for valid configs: the loop is bounded by the stage count and no
/// step can fail. Every stage costs the same fixed calendar time regardless
/// of how many units it consumes, so a partial final stage still takes a
/// full stage.
pub fn simulate<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> SimulationResult {
    // delay_mean_weeks is validated finite and positive at construction, so
    // the distribution is always constructible.
    let delay = Poisson::new(config.delay_mean_weeks).ok();

    let stage_count = config.stage_count();
    let mut units_remaining = config.total_units;
    let mut current = config.start_date;

    for stage in 1..=stage_count {
        let outcome =
            advance_stage(config, rng, delay.as_ref(), stage, stage_count, units_remaining, current);
        units_remaining -= outcome.units;
        current = outcome.end_date;
    }

    finish(config.start_date, current)
}

/// Variant of [`simulate`] that also returns the per-stage traversal
/// records, for inspection and debug output.
pub fn simulate_with_stages<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> (SimulationResult, Vec<StageOutcome>) {
    let delay = Poisson::new(config.delay_mean_weeks).ok();

    let stage_count = config.stage_count();
    let mut units_remaining = config.total_units;
    let mut current = config.start_date;
    let mut stages = Vec::with_capacity(stage_count as usize);

    for stage in 1..=stage_count {
        let outcome =
            advance_stage(config, rng, delay.as_ref(), stage, stage_count, units_remaining, current);
        units_remaining -= outcome.units;
        current = outcome.end_date;
        stages.push(outcome);
    }

    (finish(config.start_date, current), stages)
}

/// Walk one stage's phase sequence from `start` and record its outcome.
fn advance_stage<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
    delay: Option<&Poisson<f64>>,
    stage: u32,
    stage_count: u32,
    units_remaining: u32,
    start: Date,
) -> StageOutcome {
    let units = config.units_per_stage.min(units_remaining);

    let mut current = start.saturating_add(ORIENTATION_WEEKS.weeks());

    // The delay draw is conditioned on the disruption trial succeeding.
    // Drawing it unconditionally would consume extra values from the stream
    // and change every subsequent run under the same seed.
    let disruption_weeks = if rng.random::<f64>() < config.disruption_probability {
        delay.map_or(0, |d| d.sample(rng) as u32)
    } else {
        0
    };
    current = current.saturating_add((TEACHING_WEEKS + i64::from(disruption_weeks)).weeks());

    current = current.saturating_add(ASSESSMENT_WEEKS.weeks());
    current = current.saturating_add(EXAMINATION_WEEKS.weeks());
    current = current.saturating_add(BREAK_WEEKS.weeks());

    if stage + 1 == stage_count {
        current = current.saturating_add(PLACEMENT_WEEKS.weeks());
    }
    // A single-stage pathway only gets the final-stage additions; the
    // placement branch above cannot fire when stage_count == 1.
    if stage == stage_count {
        current = current.saturating_add(GRADUATION_WEEKS.weeks());
        current = current.saturating_add(CAPSTONE_WEEKS.weeks());
    }

    StageOutcome {
        stage,
        units,
        disruption_weeks,
        end_date: current,
    }
}

fn finish(start_date: Date, final_date: Date) -> SimulationResult {
    let elapsed_days = (final_date - start_date).get_days();
    SimulationResult {
        duration_months: f64::from(elapsed_days) / DAYS_PER_MONTH,
        final_date,
    }
}

/// Outcome of a Monte Carlo batch: per-run results in run order plus
/// summary statistics over the run durations.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub results: Vec<SimulationResult>,
    pub stats: AggregateStatistics,
}

/// Run `trials` independent simulations off one shared random stream.
///
/// Run `i` consumes the stream strictly after run `i - 1`, which is what
/// makes a fixed seed reproduce the same duration sequence element for
/// element. Fails only when `trials` is zero.
pub fn run_batch<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
    trials: usize,
) -> Result<BatchOutcome, ConfigError> {
    if trials == 0 {
        return Err(ConfigError::ZeroCount { field: "trials" });
    }

    let mut results = Vec::with_capacity(trials);
    for _ in 0..trials {
        results.push(simulate(config, rng));
    }

    // trials > 0, so the statistics always exist
    let stats = AggregateStatistics::from_results(&results)
        .ok_or(ConfigError::ZeroCount { field: "trials" })?;

    Ok(BatchOutcome { results, stats })
}

/// Parallel batch: each run owns a generator seeded from `seed` and its run
/// index, so no shared mutable stream exists and results stay deterministic
/// for a fixed seed. The output buffer is ordered by run index, not by
/// completion order.
///
/// The duration sequence differs from [`run_batch`]'s for the same seed
/// because each run draws from its own substream.
#[cfg(feature = "parallel")]
pub fn run_batch_parallel(
    config: &SimulationConfig,
    seed: u64,
    trials: usize,
) -> Result<BatchOutcome, ConfigError> {
    use rand::rngs::SmallRng;

    if trials == 0 {
        return Err(ConfigError::ZeroCount { field: "trials" });
    }

    let results: Vec<SimulationResult> = (0..trials)
        .into_par_iter()
        .map(|run| {
            let mut rng = SmallRng::seed_from_u64(seed ^ run as u64);
            simulate(config, &mut rng)
        })
        .collect();

    let stats = AggregateStatistics::from_results(&results)
        .ok_or(ConfigError::ZeroCount { field: "trials" })?;

    Ok(BatchOutcome { results, stats })
}
