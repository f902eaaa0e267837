//! Descriptive statistics for numeric columns

use polars::prelude::*;
use serde::Serialize;

use super::column::non_null_values;
use super::error::AnalysisError;
use super::outliers::quantile_sorted;

/// Count, moments, and quartiles for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    /// Non-null value count
    pub count: usize,
    pub mean: f64,
    /// Bessel-corrected standard deviation; 0.0 for a single value
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize one numeric column over its non-null values.
pub fn describe_column(column: &Column) -> Result<ColumnSummary, AnalysisError> {
    let mut sorted = non_null_values(column)?;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let sum_sq_dev = sorted.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
        (sum_sq_dev / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    Ok(ColumnSummary {
        column: column.name().to_string(),
        count: n,
        mean,
        std,
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted[n - 1],
    })
}

/// Summarize all given numeric columns, skipping ones that fail.
pub fn describe_columns(
    df: &DataFrame,
    numerical_cols: &[String],
) -> Vec<(String, Result<ColumnSummary, AnalysisError>)> {
    numerical_cols
        .iter()
        .map(|name| {
            let result = df
                .column(name)
                .map_err(AnalysisError::from)
                .and_then(describe_column);
            (name.clone(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_column() {
        let column = Column::new("x".into(), [1.0f64, 2.0, 3.0, 4.0, 5.0]);
        let summary = describe_column(&column).unwrap();

        assert_eq!(summary.count, 5);
        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.std - 2.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.max, 5.0);
        assert!((summary.q1 - 2.0).abs() < 1e-12);
        assert!((summary.q3 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_describe_skips_nulls() {
        let column = Column::new("x".into(), [Some(10.0f64), None, Some(20.0)]);
        let summary = describe_column(&column).unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_std() {
        let column = Column::new("x".into(), [42.0f64]);
        let summary = describe_column(&column).unwrap();
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.min, summary.max);
    }
}
