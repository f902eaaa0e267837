//! Coverage aggregation: how often simulated intervals capture a reference
//!
//! Each iteration draws an independent with-replacement sample from the full
//! column, estimates a confidence interval, and checks it against a reference
//! value (the full-column mean unless the caller supplies something else).
//! As the iteration count grows the observed coverage rate approaches the
//! nominal confidence level, which is the property the report uses to
//! illustrate what "95% confidence" actually promises.

use rand::rngs::StdRng;
use serde::Serialize;

use super::error::AnalysisError;
use super::interval::{self, IntervalEstimate};
use super::resample;

/// Outcome of many independent interval simulations against one reference.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageResult {
    pub estimates: Vec<IntervalEstimate>,
    pub reference_value: f64,
    /// Parallel to `estimates`: whether each interval contains the reference
    pub covered_flags: Vec<bool>,
    /// Fraction of intervals that cover the reference, in [0, 1]
    pub coverage_rate: f64,
}

/// Run `iterations` independent interval estimations and aggregate coverage.
///
/// Iterations are independent; failures in the very first draw (empty or
/// degenerate input) surface immediately since every subsequent iteration
/// would fail identically.
pub fn aggregate(
    population: &[f64],
    sample_size: usize,
    confidence_level: f64,
    iterations: usize,
    reference_value: f64,
    rng: &mut StdRng,
) -> Result<CoverageResult, AnalysisError> {
    let mut estimates = Vec::with_capacity(iterations);
    let mut covered_flags = Vec::with_capacity(iterations);
    let mut covered = 0usize;

    for _ in 0..iterations {
        let drawn = resample::sample(population, sample_size, true, rng)?;
        let estimate = interval::estimate(&drawn, confidence_level)?;
        let covers = estimate.covers(reference_value);

        covered += usize::from(covers);
        covered_flags.push(covers);
        estimates.push(estimate);
    }

    let coverage_rate = if iterations == 0 {
        0.0
    } else {
        covered as f64 / iterations as f64
    };

    Ok(CoverageResult {
        estimates,
        reference_value,
        covered_flags,
        coverage_rate,
    })
}

/// Mean of the full column, the default reference value for coverage runs.
pub fn population_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
