//! Tests for timeline generation and Monte Carlo batches
//!
//! These tests verify that:
//! - A fixed seed reproduces the same duration sequence element for element
//! - The undisrupted pathway collapses to a single deterministic duration
//! - Stage accounting (count, units, special-case additions) is correct
//! - Batch statistics are ordered `min <= mean <= max`

use jiff::ToSpan;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::simulation::{run_batch, simulate, simulate_with_stages};

fn config_with(
    total_units: u32,
    units_per_stage: u32,
    disruption_probability: f64,
) -> SimulationConfig {
    SimulationConfig::new(
        total_units,
        units_per_stage,
        disruption_probability,
        jiff::civil::date(2026, 2, 6),
    )
    .unwrap()
}

#[test]
fn test_stage_count_rounds_up() {
    assert_eq!(config_with(26, 4, 0.0).stage_count(), 7);
    assert_eq!(config_with(25, 5, 0.0).stage_count(), 5);
    assert_eq!(config_with(27, 4, 0.0).stage_count(), 7);
    assert_eq!(config_with(4, 6, 0.0).stage_count(), 1);
}

#[test]
fn test_deterministic_under_fixed_seed() {
    let config = config_with(26, 4, 0.35);

    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);

    let batch_a = run_batch(&config, &mut rng_a, 60).unwrap();
    let batch_b = run_batch(&config, &mut rng_b, 60).unwrap();

    assert_eq!(batch_a.results.len(), batch_b.results.len());
    for (a, b) in batch_a.results.iter().zip(&batch_b.results) {
        assert_eq!(a.duration_months, b.duration_months);
        assert_eq!(a.final_date, b.final_date);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let config = config_with(26, 4, 0.5);

    let mut rng_a = SmallRng::seed_from_u64(1);
    let mut rng_b = SmallRng::seed_from_u64(2);

    let batch_a = run_batch(&config, &mut rng_a, 40).unwrap();
    let batch_b = run_batch(&config, &mut rng_b, 40).unwrap();

    let identical = batch_a
        .results
        .iter()
        .zip(&batch_b.results)
        .all(|(a, b)| a.duration_months == b.duration_months);
    assert!(!identical, "distinct seeds should produce distinct sequences");
}

#[test]
fn test_undisrupted_pathway_is_constant() {
    // 7 stages x 19 weeks, plus 12 weeks of placement before the final
    // stage and 4 + 24 weeks after it: 173 weeks in total.
    let config = config_with(26, 4, 0.0);

    let mut rng = SmallRng::seed_from_u64(42);
    let batch = run_batch(&config, &mut rng, 25).unwrap();

    let first = batch.results[0].duration_months;
    for result in &batch.results {
        assert_eq!(result.duration_months, first);
    }

    let expected_days = 173 * 7;
    let expected_months = f64::from(expected_days) / 30.0;
    assert!((first - expected_months).abs() < 1e-12);
    assert_eq!(
        batch.results[0].final_date,
        config.start_date.saturating_add(i64::from(expected_days).days())
    );

    // No spread either
    assert_eq!(batch.stats.min_months, batch.stats.max_months);
    assert!((batch.stats.mean_months - expected_months).abs() < 1e-12);
}

#[test]
fn test_single_stage_pathway_skips_placement() {
    // One stage: 19 weeks plus the final-stage additions (4 + 24), and no
    // placement, since there is no second-to-last stage.
    let config = config_with(4, 6, 0.0);
    assert_eq!(config.stage_count(), 1);

    let mut rng = SmallRng::seed_from_u64(7);
    let result = simulate(&config, &mut rng);

    let expected_months = f64::from(47 * 7) / 30.0;
    assert!((result.duration_months - expected_months).abs() < 1e-12);
}

#[test]
fn test_two_stage_pathway_has_placement() {
    // Two stages: 2 x 19 weeks, placement after the first (second-to-last)
    // stage, graduation and capstone after the second: 78 weeks.
    let config = config_with(8, 6, 0.0);
    assert_eq!(config.stage_count(), 2);

    let mut rng = SmallRng::seed_from_u64(7);
    let result = simulate(&config, &mut rng);

    let expected_months = f64::from(78 * 7) / 30.0;
    assert!((result.duration_months - expected_months).abs() < 1e-12);
}

#[test]
fn test_stage_outcomes_account_for_all_units() {
    let config = config_with(26, 4, 0.3);
    let mut rng = SmallRng::seed_from_u64(11);

    let (result, stages) = simulate_with_stages(&config, &mut rng);

    assert_eq!(stages.len(), 7);
    assert_eq!(stages.iter().map(|s| s.units).sum::<u32>(), 26);
    // Six full stages, then the 2-unit remainder
    assert!(stages[..6].iter().all(|s| s.units == 4));
    assert_eq!(stages[6].units, 2);

    for (i, s) in stages.iter().enumerate() {
        assert_eq!(s.stage, i as u32 + 1);
    }
    for pair in stages.windows(2) {
        assert!(pair[0].end_date < pair[1].end_date);
    }
    assert_eq!(stages.last().unwrap().end_date, result.final_date);
}

#[test]
fn test_no_disruption_weeks_when_probability_zero() {
    let config = config_with(26, 4, 0.0);
    let mut rng = SmallRng::seed_from_u64(5);

    let (_, stages) = simulate_with_stages(&config, &mut rng);
    assert!(stages.iter().all(|s| s.disruption_weeks == 0));
}

#[test]
fn test_undisrupted_run_consumes_one_draw_per_stage() {
    // The delay draw must be skipped when the disruption trial fails, so a
    // fully undisrupted run consumes exactly one uniform draw per stage.
    let config = config_with(26, 4, 0.0);

    let mut rng = SmallRng::seed_from_u64(9);
    simulate(&config, &mut rng);

    let mut reference = SmallRng::seed_from_u64(9);
    for _ in 0..config.stage_count() {
        let _: f64 = reference.random();
    }

    assert_eq!(rng.random::<u64>(), reference.random::<u64>());
}

#[test]
fn test_disruption_never_shortens_a_run() {
    let floor = {
        let config = config_with(26, 4, 0.0);
        let mut rng = SmallRng::seed_from_u64(3);
        simulate(&config, &mut rng).duration_months
    };

    let config = config_with(26, 4, 1.0);
    let mut rng = SmallRng::seed_from_u64(3);
    let batch = run_batch(&config, &mut rng, 50).unwrap();

    for result in &batch.results {
        assert!(result.duration_months >= floor);
    }
}

#[test]
fn test_stats_ordering() {
    let config = config_with(26, 4, 0.3);
    let mut rng = SmallRng::seed_from_u64(42);

    let batch = run_batch(&config, &mut rng, 100).unwrap();
    let stats = &batch.stats;

    assert!(stats.min_months <= stats.mean_months);
    assert!(stats.mean_months <= stats.max_months);
}

#[test]
fn test_run_batch_rejects_zero_trials() {
    let config = config_with(26, 4, 0.2);
    let mut rng = SmallRng::seed_from_u64(42);

    let err = run_batch(&config, &mut rng, 0).unwrap_err();
    assert!(format!("{err}").contains("trials"));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_is_deterministic_and_ordered() {
    use crate::simulation::run_batch_parallel;

    let config = config_with(26, 4, 0.35);

    let batch_a = run_batch_parallel(&config, 42, 80).unwrap();
    let batch_b = run_batch_parallel(&config, 42, 80).unwrap();

    assert_eq!(batch_a.results.len(), 80);
    for (a, b) in batch_a.results.iter().zip(&batch_b.results) {
        assert_eq!(a.duration_months, b.duration_months);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_matches_floor_without_disruption() {
    use crate::simulation::run_batch_parallel;

    let config = config_with(26, 4, 0.0);
    let batch = run_batch_parallel(&config, 42, 30).unwrap();

    let expected_months = f64::from(173 * 7) / 30.0;
    for result in &batch.results {
        assert!((result.duration_months - expected_months).abs() < 1e-12);
    }
}
