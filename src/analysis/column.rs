//! Column value extraction helpers
//!
//! All downstream statistics operate on plain `f64` slices. These helpers are
//! the single place where polars columns are cast and null-filtered, so every
//! component sees the same view of a column.

use polars::prelude::*;

use super::error::AnalysisError;

/// Extract a numeric column as `Option<f64>` per row, preserving positions.
///
/// Nulls stay in place so that row indices reported downstream (e.g. outlier
/// positions) can be joined back against the source dataset.
pub fn column_values(column: &Column) -> Result<Vec<Option<f64>>, AnalysisError> {
    let casted = column.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.iter().collect())
}

/// Extract the non-null numeric values of a column, in row order.
///
/// Fails with `EmptyColumn` when no non-null values remain.
pub fn non_null_values(column: &Column) -> Result<Vec<f64>, AnalysisError> {
    let casted = column.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    let values: Vec<f64> = ca.iter().flatten().collect();

    if values.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            column: column.name().to_string(),
        });
    }

    Ok(values)
}
