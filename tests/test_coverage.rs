//! Statistical property tests for coverage aggregation

use edastat::analysis::coverage;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_coverage_rate_approximates_nominal_level() {
    // Synthetic N(50, 10) population; at 95% confidence the observed coverage
    // should land in a law-of-large-numbers tolerance band around 0.95
    let population = common::normal_population(50.0, 10.0, 10_000, 4242);
    let reference = coverage::population_mean(&population);

    let mut rng = StdRng::seed_from_u64(4242);
    let result = coverage::aggregate(&population, 30, 0.95, 2000, reference, &mut rng).unwrap();

    assert!(
        (0.90..=0.99).contains(&result.coverage_rate),
        "Coverage {} outside tolerance band [0.90, 0.99]",
        result.coverage_rate
    );
}

#[test]
fn test_lower_confidence_lowers_coverage() {
    let population = common::normal_population(0.0, 5.0, 5000, 77);
    let reference = coverage::population_mean(&population);

    let mut rng = StdRng::seed_from_u64(77);
    let low = coverage::aggregate(&population, 30, 0.5, 1000, reference, &mut rng).unwrap();
    let high = coverage::aggregate(&population, 30, 0.99, 1000, reference, &mut rng).unwrap();

    assert!(
        low.coverage_rate < high.coverage_rate,
        "50% intervals ({}) must cover less often than 99% intervals ({})",
        low.coverage_rate,
        high.coverage_rate
    );
    // Sanity: each rate near its nominal level
    assert!((low.coverage_rate - 0.5).abs() < 0.1);
    assert!(high.coverage_rate > 0.95);
}

#[test]
fn test_result_vectors_are_parallel() {
    let population = common::normal_population(10.0, 2.0, 1000, 8);
    let reference = coverage::population_mean(&population);

    let mut rng = StdRng::seed_from_u64(8);
    let result = coverage::aggregate(&population, 20, 0.9, 100, reference, &mut rng).unwrap();

    assert_eq!(result.estimates.len(), 100);
    assert_eq!(result.covered_flags.len(), 100);
    assert_eq!(result.reference_value, reference);

    for (estimate, &covered) in result.estimates.iter().zip(&result.covered_flags) {
        assert_eq!(
            covered,
            estimate.lower_bound <= reference && reference <= estimate.upper_bound,
            "Flag must match the interval's own coverage check"
        );
    }
}

#[test]
fn test_seeded_aggregation_is_reproducible() {
    let population = common::normal_population(100.0, 15.0, 2000, 31);
    let reference = coverage::population_mean(&population);

    let mut rng_a = StdRng::seed_from_u64(31);
    let mut rng_b = StdRng::seed_from_u64(31);

    let a = coverage::aggregate(&population, 30, 0.95, 200, reference, &mut rng_a).unwrap();
    let b = coverage::aggregate(&population, 30, 0.95, 200, reference, &mut rng_b).unwrap();

    assert_eq!(a.coverage_rate, b.coverage_rate);
    assert_eq!(a.covered_flags, b.covered_flags);
}
