//! Error types for the statistical analysis core.
//!
//! Every failure mode is deterministic given the same input: callers fix the
//! configuration (smaller sample size, different column) and re-run. Batch
//! operations over many columns catch these per column and continue; requests
//! against a single selected column propagate them directly.

use thiserror::Error;

/// Errors that can occur during statistical analysis of a dataset.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The uploaded dataset could not be parsed into a tabular frame.
    #[error("Failed to parse dataset: {message}")]
    DatasetParse { message: String },

    /// A column has zero non-null values, so nothing can be sampled from it.
    #[error("Column '{column}' has no non-null values")]
    EmptyColumn { column: String },

    /// A without-replacement draw requested more values than are available.
    #[error(
        "Requested sample of {requested} values without replacement but only {available} non-null values are available"
    )]
    InsufficientData { requested: usize, available: usize },

    /// The sample is too small for a standard deviation (n < 2).
    #[error("Sample of size {size} is too small for interval estimation (need at least 2 values)")]
    DegenerateSample { size: usize },

    /// A confidence level outside the open interval (0, 1).
    #[error("Confidence level must lie strictly between 0 and 1, got {level}")]
    InvalidConfidenceLevel { level: f64 },

    /// Underlying dataframe operation failed.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}
