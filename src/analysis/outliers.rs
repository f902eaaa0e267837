//! IQR-based outlier detection
//!
//! Quartiles are computed by linear interpolation on the sorted non-null
//! values; the fences sit 1.5 interquartile ranges outside them. When every
//! value is equal the fences collapse onto the constant and any deviation is
//! flagged, which is documented behavior rather than an error.

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::column::{column_values, non_null_values};
use super::error::AnalysisError;

/// Fence multiplier on the interquartile range.
const IQR_FENCE_FACTOR: f64 = 1.5;

/// Outlier fences and flagged rows for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnOutliers {
    pub column: String,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outlier_count: usize,
    /// Row positions in the original column (nulls are never outliers)
    pub outlier_rows: Vec<usize>,
}

/// Linear-interpolation quantile of an ascending-sorted slice.
///
/// Matches the standard `(n - 1) * q` positional interpolation used by
/// dataframe libraries. The slice must be non-empty and sorted.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Detect outliers in one column via 1.5 * IQR fences.
pub fn detect(column: &Column) -> Result<ColumnOutliers, AnalysisError> {
    let mut sorted = non_null_values(column)?;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_FENCE_FACTOR * iqr;
    let upper_fence = q3 + IQR_FENCE_FACTOR * iqr;

    let outlier_rows: Vec<usize> = column_values(column)?
        .iter()
        .enumerate()
        .filter_map(|(row, value)| match value {
            Some(v) if *v < lower_fence || *v > upper_fence => Some(row),
            _ => None,
        })
        .collect();

    Ok(ColumnOutliers {
        column: column.name().to_string(),
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        outlier_count: outlier_rows.len(),
        outlier_rows,
    })
}

/// Detect outliers across all given numeric columns.
///
/// Per-column failures (e.g. an all-null column) are recorded and do not
/// abort the batch; results come back in the input column order.
pub fn detect_all(
    df: &DataFrame,
    numerical_cols: &[String],
) -> Vec<(String, Result<ColumnOutliers, AnalysisError>)> {
    numerical_cols
        .par_iter()
        .map(|name| {
            let result = df
                .column(name)
                .map_err(AnalysisError::from)
                .and_then(detect);
            (name.clone(), result)
        })
        .collect()
}
