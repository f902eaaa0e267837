//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::error::AnalysisError;

/// Load a dataset eagerly from a file (CSV or Parquet based on extension).
///
/// Malformed input surfaces as a `DatasetParse` error with the offending path
/// in the message chain; the statistical core never sees raw files.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    // 0 means full table scan for schema inference
    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(schema_length)
            .finish()
            .map_err(parse_error)
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .map_err(parse_error)
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    lf.collect()
        .map_err(parse_error)
        .with_context(|| format!("Failed to load dataset: {}", path.display()))
}

fn parse_error(err: PolarsError) -> AnalysisError {
    AnalysisError::DatasetParse {
        message: err.to_string(),
    }
}

/// Shape and estimated memory footprint of a loaded dataset.
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}
