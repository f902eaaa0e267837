//! Central Limit Theorem simulation
//!
//! Repeatedly resamples the full column (with replacement) and records each
//! sample's mean. The resulting empirical sampling distribution approaches
//! normality as the sample size grows, whatever the shape of the original
//! column, which is the property the report uses to justify t-based
//! intervals on skewed data.

use rand::rngs::StdRng;

use super::error::AnalysisError;
use super::resample;

/// Simulate the sampling distribution of the mean.
///
/// Draws `iterations` with-replacement samples of `sample_size` from
/// `population` and returns their means in draw order.
pub fn simulate(
    population: &[f64],
    sample_size: usize,
    iterations: usize,
    rng: &mut StdRng,
) -> Result<Vec<f64>, AnalysisError> {
    let mut means = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let drawn = resample::sample(population, sample_size, true, rng)?;
        let mean = drawn.iter().sum::<f64>() / drawn.len() as f64;
        means.push(mean);
    }

    Ok(means)
}

/// Adjusted Fisher-Pearson sample skewness (the pandas `skew()` statistic).
///
/// Returns `None` for fewer than 3 values or zero variance, where the
/// statistic is undefined.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let m2 = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n_f;
    let m3 = values.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n_f;

    if m2 == 0.0 {
        return None;
    }

    let g1 = m3 / m2.powf(1.5);
    Some((n_f * (n_f - 1.0)).sqrt() / (n_f - 2.0) * g1)
}

/// Absolute skewness above which a column is flagged as visibly non-normal.
pub const SKEWNESS_WARNING_THRESHOLD: f64 = 0.5;
