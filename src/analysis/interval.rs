//! Confidence interval estimation using the Student's t distribution
//!
//! The estimator is fully deterministic: given the same sample and confidence
//! level it returns bit-identical bounds. All randomness lives in the
//! resampler; all arithmetic is double precision with no rounding (display
//! rounding is the report layer's concern).

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use super::error::AnalysisError;

/// A confidence interval for the mean, computed from one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalEstimate {
    pub sample_mean: f64,
    /// Bessel-corrected sample standard deviation (divisor n - 1)
    pub sample_std: f64,
    pub standard_error: f64,
    /// Two-tailed Student's t quantile at (1 + confidence_level) / 2
    pub critical_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence_level: f64,
    pub sample_size: usize,
    pub degrees_of_freedom: usize,
}

impl IntervalEstimate {
    /// Whether the interval contains a reference value (bounds inclusive).
    pub fn covers(&self, reference: f64) -> bool {
        self.lower_bound <= reference && reference <= self.upper_bound
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Estimate a confidence interval for the mean of `sample`.
///
/// Requires at least 2 values (the standard deviation is undefined below
/// that) and a confidence level strictly inside (0, 1).
pub fn estimate(sample: &[f64], confidence_level: f64) -> Result<IntervalEstimate, AnalysisError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(AnalysisError::InvalidConfidenceLevel {
            level: confidence_level,
        });
    }

    let n = sample.len();
    if n < 2 {
        return Err(AnalysisError::DegenerateSample { size: n });
    }

    let mean = sample.iter().sum::<f64>() / n as f64;
    let sum_sq_dev = sample.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    let std = (sum_sq_dev / (n - 1) as f64).sqrt();
    let standard_error = std / (n as f64).sqrt();

    let degrees_of_freedom = n - 1;
    // dof >= 1 is guaranteed by the n >= 2 check above
    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom as f64)
        .expect("Student's t with dof >= 1 is always valid");
    let critical_value = t_dist.inverse_cdf((1.0 + confidence_level) / 2.0);

    let margin = critical_value * standard_error;

    Ok(IntervalEstimate {
        sample_mean: mean,
        sample_std: std,
        standard_error,
        critical_value,
        lower_bound: mean - margin,
        upper_bound: mean + margin,
        confidence_level,
        sample_size: n,
        degrees_of_freedom,
    })
}
