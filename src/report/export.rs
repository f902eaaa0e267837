//! JSON export of analysis results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::analysis::{ColumnOutliers, ColumnSummary, CoverageResult};

/// Metadata about the analysis run.
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Edastat version
    pub edastat_version: String,
    /// Input file path
    pub input_file: String,
    /// Cardinality threshold used for column classification
    pub cardinality_threshold: usize,
    /// Sample size per simulated draw
    pub sample_size: usize,
    /// Nominal confidence level
    pub confidence_level: f64,
    /// Iterations for the CLT simulation
    pub clt_iterations: usize,
    /// Iterations for the coverage simulation
    pub coverage_iterations: usize,
    /// RNG seed, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Coverage results condensed for export (individual intervals omitted).
#[derive(Serialize)]
pub struct CoverageExport {
    pub reference_value: f64,
    pub coverage_rate: f64,
    pub iterations: usize,
    pub mean_interval_width: f64,
}

impl From<&CoverageResult> for CoverageExport {
    fn from(result: &CoverageResult) -> Self {
        let iterations = result.estimates.len();
        let mean_interval_width = if iterations == 0 {
            0.0
        } else {
            result.estimates.iter().map(|e| e.width()).sum::<f64>() / iterations as f64
        };
        Self {
            reference_value: result.reference_value,
            coverage_rate: result.coverage_rate,
            iterations,
            mean_interval_width,
        }
    }
}

/// A single column's results with any per-step failure recorded.
#[derive(Serialize)]
pub struct ColumnExportEntry {
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ColumnSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageExport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outliers: Option<ColumnOutliers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete analysis export with metadata.
#[derive(Serialize)]
pub struct EdaExport {
    pub metadata: ExportMetadata,
    /// Column names classified as numerical
    pub numerical_columns: Vec<String>,
    /// Column names classified as categorical
    pub categorical_columns: Vec<String>,
    /// Per-column analysis results
    pub columns: Vec<ColumnExportEntry>,
}

/// Write the full analysis export as pretty-printed JSON.
pub fn export_analysis(export: &EdaExport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(export).context("Failed to serialize analysis to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write analysis to {}", output_path.display()))?;

    Ok(())
}

impl ExportMetadata {
    pub fn now(input_file: &Path, config: &ExportConfig) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            edastat_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            cardinality_threshold: config.cardinality_threshold,
            sample_size: config.sample_size,
            confidence_level: config.confidence_level,
            clt_iterations: config.clt_iterations,
            coverage_iterations: config.coverage_iterations,
            seed: config.seed,
        }
    }
}

/// Configuration echo for the export metadata.
pub struct ExportConfig {
    pub cardinality_threshold: usize,
    pub sample_size: usize,
    pub confidence_level: f64,
    pub clt_iterations: usize,
    pub coverage_iterations: usize,
    pub seed: Option<u64>,
}
