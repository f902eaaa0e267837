//! Column classification into numerical and categorical sets
//!
//! A numeric column with few distinct values (a 0/1 flag, a small integer
//! code) is treated as categorical on purpose: low-cardinality codes should
//! not be analyzed as continuous variables. The classification is computed
//! once per dataset snapshot and passed explicitly to every downstream
//! component instead of re-deriving dtypes per call.

use polars::prelude::*;
use serde::Serialize;

use super::error::AnalysisError;

/// Default distinct-value count a numeric column must exceed to be
/// considered continuous.
pub const DEFAULT_CARDINALITY_THRESHOLD: usize = 10;

/// Disjoint partition of a dataset's column names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnClassification {
    /// Numeric dtype with more than `cardinality_threshold` distinct values
    pub numerical: Vec<String>,
    /// Everything else: string columns and low-cardinality numeric codes
    pub categorical: Vec<String>,
}

impl ColumnClassification {
    /// Check whether a column was classified as numerical.
    pub fn is_numerical(&self, name: &str) -> bool {
        self.numerical.iter().any(|c| c == name)
    }
}

/// Partition the dataset's columns into numerical and categorical sets.
///
/// A column is numerical when its dtype is a primitive numeric type AND its
/// distinct non-null value count exceeds `cardinality_threshold` (must be
/// >= 1, default 10). An empty dataset yields two empty sets.
pub fn classify_columns(
    df: &DataFrame,
    cardinality_threshold: usize,
) -> Result<ColumnClassification, AnalysisError> {
    let mut classification = ColumnClassification::default();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        let distinct = series.n_unique()?;
        // n_unique counts the null pseudo-value; exclude it
        let distinct_non_null = distinct.saturating_sub(usize::from(column.null_count() > 0));

        if column.dtype().is_primitive_numeric() && distinct_non_null > cardinality_threshold {
            classification.numerical.push(column.name().to_string());
        } else {
            classification.categorical.push(column.name().to_string());
        }
    }

    Ok(classification)
}
