use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use pathsim_core::baseline::{DEFAULT_FIXED_PATHWAY_WEEKS, fixed_pathway_months};
use pathsim_core::config::SimulationConfig;
use pathsim_core::sensitivity::{SweepConfig, sweep_with_config};
use pathsim_core::simulation::{run_batch, run_batch_parallel};

mod export;
mod logging;
mod report;
mod validation;

#[derive(Parser, Debug)]
#[command(name = "pathsim")]
#[command(about = "A stochastic educational pathway duration simulator")]
struct Args {
    /// Academic credit units required to complete the pathway
    #[arg(long, default_value_t = 26)]
    total_units: u32,

    /// Units completed per stage
    #[arg(long, default_value_t = 4)]
    units_per_stage: u32,

    /// Probability that a stage's teaching phase is disrupted
    #[arg(long, default_value_t = 0.2)]
    disruption_probability: f64,

    /// Number of Monte Carlo runs
    #[arg(long, default_value_t = 100)]
    trials: u32,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// First day of the first stage (YYYY-MM-DD)
    #[arg(long, default_value = "2026-02-06")]
    start_date: String,

    /// Also run the disruption-probability sensitivity sweep
    #[arg(long)]
    sweep: bool,

    /// Fan runs out across threads with per-run derived seeds instead of
    /// the sequential shared stream
    #[arg(long)]
    parallel: bool,

    /// Write per-trial results to a CSV file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit the full report as JSON on stdout instead of text
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    validation::validate_inputs(
        args.total_units,
        args.units_per_stage,
        args.disruption_probability,
        args.trials,
        args.seed,
    )?;

    let start_date: jiff::civil::Date = args.start_date.parse()?;
    let config = SimulationConfig::new(
        args.total_units,
        args.units_per_stage,
        args.disruption_probability,
        start_date,
    )?;

    tracing::info!(
        total_units = config.total_units,
        units_per_stage = config.units_per_stage,
        stages = config.stage_count(),
        trials = args.trials,
        seed = args.seed,
        parallel = args.parallel,
        "running pathway simulation"
    );

    let trials = args.trials as usize;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let batch = if args.parallel {
        run_batch_parallel(&config, args.seed, trials)?
    } else {
        run_batch(&config, &mut rng, trials)?
    };

    let baseline_months = fixed_pathway_months(DEFAULT_FIXED_PATHWAY_WEEKS);

    let sensitivity = if args.sweep {
        let sweep_config = SweepConfig::default();
        tracing::info!(
            points = sweep_config.step_count,
            batch_size = sweep_config.batch_size,
            "running sensitivity sweep"
        );
        Some(sweep_with_config(&config, &mut rng, &sweep_config)?)
    } else {
        None
    };

    if let Some(path) = &args.out {
        export::write_trials_csv(path, &batch.results)?;
        tracing::info!(
            path = %path.display(),
            rows = batch.results.len(),
            "wrote trial export"
        );
    }

    if args.json {
        println!(
            "{}",
            report::render_json(&config, &batch, baseline_months, sensitivity.as_deref())?
        );
    } else {
        print!(
            "{}",
            report::render_text(&config, &batch, baseline_months, sensitivity.as_deref())
        );
    }

    Ok(())
}
