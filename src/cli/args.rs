//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Edastat - Exploratory data analysis with confidence interval simulation
#[derive(Parser, Debug)]
#[command(name = "edastat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Numerical columns to analyze (comma-separated).
    /// If not provided, all columns classified as numerical are analyzed.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Distinct-value count a numeric column must exceed to be treated as
    /// continuous; numeric columns at or below it are treated as categorical.
    #[arg(long, default_value = "10", value_parser = validate_cardinality_threshold)]
    pub cardinality_threshold: usize,

    /// Values drawn per simulated sample (minimum 2)
    #[arg(long, default_value = "30", value_parser = validate_sample_size)]
    pub sample_size: usize,

    /// Confidence level for interval estimation, strictly between 0 and 1
    #[arg(long, default_value = "0.95", value_parser = validate_confidence_level)]
    pub confidence_level: f64,

    /// Iterations for the CLT sampling-distribution simulation
    #[arg(long, default_value = "1000")]
    pub clt_iterations: usize,

    /// Iterations for the coverage simulation
    #[arg(long, default_value = "100")]
    pub coverage_iterations: usize,

    /// Draw the headline sample without replacement.
    /// The repeated coverage and CLT simulations always resample the
    /// population with replacement; this flag only affects the single
    /// interval shown per column, and fails when the sample size exceeds
    /// the column's non-null count.
    #[arg(long, default_value = "false")]
    pub without_replacement: bool,

    /// RNG seed for reproducible simulations. Defaults to process entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report output path (Markdown).
    /// Defaults to input directory with '_eda_report.md' suffix
    /// (e.g., data.csv -> data_eda_report.md).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional path for a JSON export of all analysis results
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Get the input path.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the report path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}_eda_report.md", stem))
        }))
    }
}

/// Validator for confidence_level: the open interval (0, 1)
fn validate_confidence_level(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(format!(
            "confidence_level must lie strictly between 0 and 1, got {}",
            value
        ))
    }
}

/// Validator for sample_size: at least 2 (standard deviation undefined below)
fn validate_sample_size(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    if value >= 2 {
        Ok(value)
    } else {
        Err("sample_size must be at least 2".to_string())
    }
}

/// Validator for cardinality_threshold: at least 1
fn validate_cardinality_threshold(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    if value >= 1 {
        Ok(value)
    } else {
        Err("cardinality_threshold must be at least 1".to_string())
    }
}
