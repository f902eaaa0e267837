//! Plot and document sinks
//!
//! The statistical core hands visualization data and report blocks to these
//! traits and never inspects what comes back beyond an opaque artifact path.
//! The built-in sinks persist plot series as JSON data files and render the
//! document as Markdown; pixel rendering, pagination, and styling belong to
//! whatever consumes the artifacts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::IntervalEstimate;

/// One chart's worth of data, ready for a rendering collaborator.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotSeries<'a> {
    /// Simulated intervals with a reference line, for coverage visualization
    Intervals {
        column: &'a str,
        estimates: &'a [IntervalEstimate],
        reference: f64,
    },
    /// Raw column values for a distribution histogram
    Distribution { column: &'a str, values: &'a [f64] },
    /// Scalar values for a histogram (e.g. CLT sample means)
    Histogram { column: &'a str, values: &'a [f64] },
    /// Raw column values plus fences, for boxplot/outlier visualization
    BoxPlot {
        column: &'a str,
        values: &'a [f64],
        lower_fence: f64,
        upper_fence: f64,
    },
}

impl PlotSeries<'_> {
    fn column(&self) -> &str {
        match self {
            PlotSeries::Intervals { column, .. }
            | PlotSeries::Distribution { column, .. }
            | PlotSeries::Histogram { column, .. }
            | PlotSeries::BoxPlot { column, .. } => column,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            PlotSeries::Intervals { .. } => "intervals",
            PlotSeries::Distribution { .. } => "distribution",
            PlotSeries::Histogram { .. } => "histogram",
            PlotSeries::BoxPlot { .. } => "box_plot",
        }
    }
}

/// Renders one data series into one independent chart artifact.
pub trait PlotSink {
    fn render(&mut self, series: &PlotSeries) -> Result<PathBuf>;
}

/// An ordered piece of the final report.
#[derive(Debug, Clone)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    /// Reference to an artifact produced by a [`PlotSink`]
    Image(PathBuf),
}

/// Renders an ordered block sequence into one report artifact.
pub trait DocumentSink {
    fn render(&mut self, blocks: &[Block]) -> Result<PathBuf>;
}

/// Plot sink that persists each series as a JSON data file.
///
/// Each call produces one independent artifact; there is no shared canvas
/// state between calls.
pub struct JsonPlotSink {
    out_dir: PathBuf,
}

impl JsonPlotSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl PlotSink for JsonPlotSink {
    fn render(&mut self, series: &PlotSeries) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create plot directory: {}", self.out_dir.display())
        })?;

        let path = self
            .out_dir
            .join(format!("{}_{}.json", series.kind(), sanitize(series.column())));
        let payload = serde_json::to_string_pretty(series)
            .context("Failed to serialize plot series")?;
        std::fs::write(&path, payload)
            .with_context(|| format!("Failed to write plot artifact: {}", path.display()))?;

        Ok(path)
    }
}

/// Document sink that renders the report blocks as a Markdown file.
pub struct MarkdownDocumentSink {
    path: PathBuf,
}

impl MarkdownDocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for MarkdownDocumentSink {
    fn render(&mut self, blocks: &[Block]) -> Result<PathBuf> {
        let mut doc = String::new();

        for block in blocks {
            match block {
                Block::Heading(text) => {
                    doc.push_str("## ");
                    doc.push_str(text);
                    doc.push_str("\n\n");
                }
                Block::Paragraph(text) => {
                    doc.push_str(text);
                    doc.push_str("\n\n");
                }
                Block::Image(artifact) => {
                    doc.push_str(&format!("![chart]({})\n\n", artifact.display()));
                }
            }
        }

        std::fs::write(&self.path, doc)
            .with_context(|| format!("Failed to write report: {}", self.path.display()))?;

        Ok(self.path.clone())
    }
}

/// Make a column name safe for use in a file name.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Derive the plot artifact directory next to a report path.
pub fn plot_dir_for(report_path: &Path) -> PathBuf {
    let stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let parent = report_path.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}_plots", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_column_names() {
        assert_eq!(sanitize("total sales ($)"), "total_sales____");
        assert_eq!(sanitize("col_1"), "col_1");
    }

    #[test]
    fn test_plot_dir_derivation() {
        let dir = plot_dir_for(Path::new("/tmp/data_eda_report.md"));
        assert_eq!(dir, PathBuf::from("/tmp/data_eda_report_plots"));
    }

    #[test]
    fn test_markdown_document_sink() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.md");
        let mut sink = MarkdownDocumentSink::new(&path);

        let blocks = vec![
            Block::Heading("Column Classification".to_string()),
            Block::Paragraph("2 numerical, 1 categorical".to_string()),
            Block::Image(PathBuf::from("plots/histogram_age.json")),
        ];

        let artifact = sink.render(&blocks).unwrap();
        let rendered = std::fs::read_to_string(&artifact).unwrap();

        assert!(rendered.contains("## Column Classification"));
        assert!(rendered.contains("2 numerical, 1 categorical"));
        assert!(rendered.contains("histogram_age.json"));
    }

    #[test]
    fn test_json_plot_sink_writes_artifact() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut sink = JsonPlotSink::new(tmp.path().join("plots"));

        let means = [1.0, 2.0, 3.0];
        let artifact = sink
            .render(&PlotSeries::Histogram {
                column: "age",
                values: &means,
            })
            .unwrap();

        assert!(artifact.exists());
        let payload: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&artifact).unwrap()).unwrap();
        assert_eq!(payload["kind"], "histogram");
    }

    #[test]
    fn test_distribution_and_histogram_artifacts_are_distinct() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut sink = JsonPlotSink::new(tmp.path().join("plots"));

        let values = [1.0, 2.0, 3.0];
        let raw = sink
            .render(&PlotSeries::Distribution {
                column: "age",
                values: &values,
            })
            .unwrap();
        let means = sink
            .render(&PlotSeries::Histogram {
                column: "age",
                values: &values,
            })
            .unwrap();

        // Same column, two independent artifacts
        assert_ne!(raw, means);
        assert!(raw.exists());
        assert!(means.exists());

        let payload: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&raw).unwrap()).unwrap();
        assert_eq!(payload["kind"], "distribution");
    }
}
