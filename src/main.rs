//! Edastat: Exploratory Data Analysis CLI
//!
//! Loads a tabular dataset, classifies its columns, simulates confidence
//! intervals and their coverage, demonstrates the Central Limit Theorem on
//! skewed columns, detects IQR outliers, and renders a report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use polars::prelude::DataFrame;
use rand::rngs::StdRng;
use rand::SeedableRng;

use edastat::analysis::{
    classify_columns, clt, coverage, dataset_stats, describe_column, detect_all, interval,
    load_dataset, missing_value_profile, non_null_values, resample, ColumnClassification,
    ColumnOutliers, ColumnSummary, CoverageResult, IntervalEstimate,
    SKEWNESS_WARNING_THRESHOLD,
};
use edastat::cli::Cli;
use edastat::report::{
    export_analysis, plot_dir_for, Block, ColumnExportEntry, ColumnOutcome, CoverageExport,
    DocumentSink, EdaExport, EdaSummary, ExportConfig, ExportMetadata, JsonPlotSink,
    MarkdownDocumentSink, PlotSeries, PlotSink,
};
use edastat::utils::{
    create_progress_bar, create_spinner, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success, print_warning,
};

/// Everything computed for one analyzed column.
struct ColumnAnalysis {
    name: String,
    summary: Option<ColumnSummary>,
    skewness: Option<f64>,
    headline: Option<IntervalEstimate>,
    coverage: Option<CoverageResult>,
    outliers: Option<ColumnOutliers>,
    artifacts: Vec<PathBuf>,
    /// First error hit; later steps for this column are skipped
    error: Option<String>,
}

impl ColumnAnalysis {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: None,
            skewness: None,
            headline: None,
            coverage: None,
            outliers: None,
            artifacts: Vec::new(),
            error: None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli.output_path().unwrap();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        input,
        &output_path,
        cli.sample_size,
        cli.confidence_level,
        cli.coverage_iterations,
        cli.clt_iterations,
        cli.seed,
    );

    // The only entropy boundary: everything downstream takes this rng
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(input, cli.infer_schema_length)?;
    let (rows, _cols, memory_mb) = dataset_stats(&df);
    finish_with_success(&spinner, "Dataset loaded");
    println!("      Rows: {}", rows);
    println!("      Columns: {}", df.width());
    println!("      Estimated memory: {:.2} MB", memory_mb);
    print_step_time(step_start.elapsed());

    // Step 2: Column classification
    print_step_header(2, "Column Classification");

    let step_start = Instant::now();
    let classification = classify_columns(&df, cli.cardinality_threshold)?;
    print_count("numerical column(s)", classification.numerical.len(), None);
    print_count(
        "categorical column(s)",
        classification.categorical.len(),
        None,
    );
    print_step_time(step_start.elapsed());

    // Resolve which columns to analyze
    let selected: Vec<String> = if cli.columns.is_empty() {
        classification.numerical.clone()
    } else {
        for name in &cli.columns {
            if !classification.is_numerical(name) {
                anyhow::bail!(
                    "Column '{}' is not a numerical column. Numerical columns: {:?}",
                    name,
                    classification.numerical
                );
            }
        }
        cli.columns.clone()
    };

    if selected.is_empty() {
        anyhow::bail!(
            "No numerical columns to analyze (cardinality threshold: {}).",
            cli.cardinality_threshold
        );
    }

    // Step 3: Missing value profile
    print_step_header(3, "Missing Value Profile");

    let step_start = Instant::now();
    let missing = missing_value_profile(&df);
    if missing.is_empty() {
        print_info("No missing values in the dataset");
    } else {
        print_count("column(s) with missing values", missing.len(), None);
        for profile in &missing {
            println!(
                "        {} - {} missing ({:.1}%)",
                profile.column, profile.missing, profile.percent
            );
        }
    }
    print_step_time(step_start.elapsed());

    let mut plot_sink = JsonPlotSink::new(plot_dir_for(&output_path));
    let mut analyses: Vec<ColumnAnalysis> = selected
        .iter()
        .map(|name| ColumnAnalysis::new(name))
        .collect();

    // Step 4: Confidence interval simulation
    print_step_header(4, "Confidence Interval Simulation");

    let step_start = Instant::now();
    let pb = create_progress_bar(analyses.len() as u64, "Simulating intervals");
    for analysis in &mut analyses {
        // Per-column failures are recorded, not fatal to the batch
        if let Err(err) = run_interval_step(&df, analysis, &cli, &mut rng, &mut plot_sink) {
            analysis.error = Some(format!("{:#}", err));
        }
        pb.inc(1);
    }

    let failed = analyses.iter().filter(|a| a.error.is_some()).count();
    if failed > 0 {
        finish_with_warning(
            &pb,
            &format!("Interval simulation complete, {} column(s) skipped", failed),
        );
    } else {
        finish_with_success(&pb, "Interval simulation complete");
    }

    for analysis in &analyses {
        if let Some(err) = &analysis.error {
            print_warning(&format!("{}: {}", analysis.name, err));
        } else if let Some(result) = &analysis.coverage {
            print_success(&format!(
                "{}: coverage {:.1}% over {} intervals (nominal {:.0}%)",
                analysis.name,
                result.coverage_rate * 100.0,
                result.estimates.len(),
                cli.confidence_level * 100.0,
            ));
        }
    }
    print_step_time(step_start.elapsed());

    // Step 5: Distribution analysis & CLT
    print_step_header(5, "Distribution Analysis & CLT");

    let step_start = Instant::now();
    let pb = create_progress_bar(analyses.len() as u64, "Simulating sampling distributions");
    let mut clt_failures: Vec<String> = Vec::new();
    for analysis in &mut analyses {
        if analysis.error.is_none() {
            if let Err(err) = run_clt_step(&df, analysis, &cli, &mut rng, &mut plot_sink) {
                clt_failures.push(format!("{}: {:#}", analysis.name, err));
                analysis.error = Some(format!("{:#}", err));
            }
        }
        pb.inc(1);
    }

    if clt_failures.is_empty() {
        finish_with_success(&pb, "CLT simulation complete");
    } else {
        finish_with_warning(
            &pb,
            &format!(
                "CLT simulation complete, {} column(s) skipped",
                clt_failures.len()
            ),
        );
        for failure in &clt_failures {
            print_warning(failure);
        }
    }

    for analysis in &analyses {
        if analysis.error.is_some() {
            continue;
        }

        match analysis.skewness {
            Some(skew) if skew.abs() > SKEWNESS_WARNING_THRESHOLD => {
                print_warning(&format!(
                    "{}: skewness {:.2} - not normal, CLT sampling distribution rendered",
                    analysis.name, skew
                ));
            }
            Some(skew) => {
                print_success(&format!("{}: skewness {:.2}", analysis.name, skew));
            }
            None => {
                print_info(&format!(
                    "{}: skewness undefined, CLT simulation still rendered",
                    analysis.name
                ));
            }
        }
    }
    print_step_time(step_start.elapsed());

    // Step 6: Outlier detection (all numerical columns, not only selected)
    print_step_header(6, "Outlier Detection");

    let step_start = Instant::now();
    let spinner = create_spinner("Computing IQR fences...");
    let outlier_results = detect_all(&df, &classification.numerical);
    finish_with_success(&spinner, "Outlier detection complete");

    for (name, result) in &outlier_results {
        match result {
            Ok(report) if report.outlier_count > 0 => {
                print_count(
                    &format!("outlier(s) in '{}'", name),
                    report.outlier_count,
                    Some(&format!(
                        "(fences [{:.2}, {:.2}])",
                        report.lower_fence, report.upper_fence
                    )),
                );
            }
            Ok(_) => {}
            Err(err) => print_warning(&format!("{}: {}", name, err)),
        }
    }
    print_step_time(step_start.elapsed());

    // Attach outlier results and box plot artifacts to analyzed columns
    for analysis in &mut analyses {
        if analysis.error.is_some() {
            continue;
        }
        let report = outlier_results
            .iter()
            .find(|(name, _)| *name == analysis.name)
            .and_then(|(_, result)| result.as_ref().ok());
        if let Some(report) = report {
            let column = df.column(&analysis.name)?;
            let values = non_null_values(column)?;
            let artifact = plot_sink.render(&PlotSeries::BoxPlot {
                column: &analysis.name,
                values: &values,
                lower_fence: report.lower_fence,
                upper_fence: report.upper_fence,
            })?;
            analysis.artifacts.push(artifact);
            analysis.outliers = Some(report.clone());
        }
    }

    // Step 7: Report generation
    print_step_header(7, "Report Generation");

    let step_start = Instant::now();
    let spinner = create_spinner("Rendering report...");

    let blocks = build_report_blocks(&classification, &analyses, &cli);
    let mut document_sink = MarkdownDocumentSink::new(&output_path);
    let report_path = document_sink
        .render(&blocks)
        .context("Failed to render report document")?;

    finish_with_success(
        &spinner,
        &format!("Report saved to {}", report_path.display()),
    );

    if let Some(json_path) = &cli.json {
        let export = build_export(input, &cli, &classification, &analyses);
        export_analysis(&export, json_path)?;
        print_success(&format!("JSON export saved to {}", json_path.display()));
    }
    print_step_time(step_start.elapsed());

    // Summary
    let mut summary = EdaSummary::new(
        rows,
        classification.numerical.len(),
        classification.categorical.len(),
        cli.confidence_level,
    );
    for analysis in &analyses {
        summary.add_outcome(ColumnOutcome {
            column: analysis.name.clone(),
            coverage_rate: analysis.coverage.as_ref().map(|c| c.coverage_rate),
            skewness: analysis.skewness,
            outlier_count: analysis.outliers.as_ref().map(|o| o.outlier_count),
            error: analysis.error.clone(),
        });
    }
    summary.display();

    print_completion();

    Ok(())
}

/// Headline interval plus coverage simulation for one column.
fn run_interval_step(
    df: &DataFrame,
    analysis: &mut ColumnAnalysis,
    cli: &Cli,
    rng: &mut StdRng,
    plot_sink: &mut impl PlotSink,
) -> Result<()> {
    let column = df.column(&analysis.name)?;
    let values = non_null_values(column)?;

    analysis.summary = Some(describe_column(column)?);

    // One visible interval from a single draw; the CLI flag only controls
    // this sample's replacement mode
    let headline_sample =
        resample::sample(&values, cli.sample_size, !cli.without_replacement, rng)?;
    analysis.headline = Some(interval::estimate(&headline_sample, cli.confidence_level)?);

    // Coverage always resamples the population with replacement
    let reference = coverage::population_mean(&values);
    let result = coverage::aggregate(
        &values,
        cli.sample_size,
        cli.confidence_level,
        cli.coverage_iterations,
        reference,
        rng,
    )?;

    let artifact = plot_sink.render(&PlotSeries::Intervals {
        column: &analysis.name,
        estimates: &result.estimates,
        reference,
    })?;
    analysis.artifacts.push(artifact);
    analysis.coverage = Some(result);

    Ok(())
}

/// Skewness check and CLT sampling-distribution simulation for one column.
fn run_clt_step(
    df: &DataFrame,
    analysis: &mut ColumnAnalysis,
    cli: &Cli,
    rng: &mut StdRng,
    plot_sink: &mut impl PlotSink,
) -> Result<()> {
    let column = df.column(&analysis.name)?;
    let values = non_null_values(column)?;

    analysis.skewness = clt::skewness(&values);

    // Raw column distribution first, then the sampling distribution of means
    let artifact = plot_sink.render(&PlotSeries::Distribution {
        column: &analysis.name,
        values: &values,
    })?;
    analysis.artifacts.push(artifact);

    let means = clt::simulate(&values, cli.sample_size, cli.clt_iterations, rng)?;
    let artifact = plot_sink.render(&PlotSeries::Histogram {
        column: &analysis.name,
        values: &means,
    })?;
    analysis.artifacts.push(artifact);

    Ok(())
}

/// Assemble the ordered report blocks handed to the document sink.
fn build_report_blocks(
    classification: &ColumnClassification,
    analyses: &[ColumnAnalysis],
    cli: &Cli,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading("Exploratory Data Analysis Report".to_string()),
        Block::Heading("Column Classification".to_string()),
        Block::Paragraph(format!(
            "Numerical columns: {}",
            join_or_none(&classification.numerical)
        )),
        Block::Paragraph(format!(
            "Categorical columns: {}",
            join_or_none(&classification.categorical)
        )),
    ];

    for analysis in analyses {
        blocks.push(Block::Heading(format!("Column: {}", analysis.name)));

        if let Some(err) = &analysis.error {
            blocks.push(Block::Paragraph(format!("Analysis skipped: {}", err)));
            continue;
        }

        if let Some(summary) = &analysis.summary {
            blocks.push(Block::Paragraph(format!(
                "n = {}, mean = {:.4}, std = {:.4}, min = {:.4}, median = {:.4}, max = {:.4}",
                summary.count, summary.mean, summary.std, summary.min, summary.median, summary.max
            )));
        }

        if let Some(estimate) = &analysis.headline {
            blocks.push(Block::Paragraph(format!(
                "{:.0}% confidence interval from one sample of {}: [{:.4}, {:.4}] (mean {:.4})",
                estimate.confidence_level * 100.0,
                estimate.sample_size,
                estimate.lower_bound,
                estimate.upper_bound,
                estimate.sample_mean,
            )));
        }

        if let Some(result) = &analysis.coverage {
            blocks.push(Block::Paragraph(format!(
                "Across {} simulated intervals, {:.1}% covered the full-column mean {:.4} \
                 (nominal level {:.0}%).",
                result.estimates.len(),
                result.coverage_rate * 100.0,
                result.reference_value,
                cli.confidence_level * 100.0,
            )));
        }

        match analysis.skewness {
            Some(skew) if skew.abs() > SKEWNESS_WARNING_THRESHOLD => {
                blocks.push(Block::Paragraph(format!(
                    "Skewness: {:.2}. The distribution is visibly skewed; the sampling \
                     distribution of the mean below is still approximately normal (CLT).",
                    skew
                )));
            }
            Some(skew) => {
                blocks.push(Block::Paragraph(format!("Skewness: {:.2}", skew)));
            }
            None => {}
        }

        if let Some(outliers) = &analysis.outliers {
            blocks.push(Block::Paragraph(format!(
                "Outliers: {} outside fences [{:.4}, {:.4}]",
                outliers.outlier_count, outliers.lower_fence, outliers.upper_fence
            )));
        }

        for artifact in &analysis.artifacts {
            blocks.push(Block::Image(artifact.clone()));
        }
    }

    blocks
}

/// Assemble the JSON export structure.
fn build_export(
    input: &std::path::Path,
    cli: &Cli,
    classification: &ColumnClassification,
    analyses: &[ColumnAnalysis],
) -> EdaExport {
    let config = ExportConfig {
        cardinality_threshold: cli.cardinality_threshold,
        sample_size: cli.sample_size,
        confidence_level: cli.confidence_level,
        clt_iterations: cli.clt_iterations,
        coverage_iterations: cli.coverage_iterations,
        seed: cli.seed,
    };

    EdaExport {
        metadata: ExportMetadata::now(input, &config),
        numerical_columns: classification.numerical.clone(),
        categorical_columns: classification.categorical.clone(),
        columns: analyses
            .iter()
            .map(|analysis| ColumnExportEntry {
                column: analysis.name.clone(),
                summary: analysis.summary.clone(),
                skewness: analysis.skewness,
                coverage: analysis.coverage.as_ref().map(CoverageExport::from),
                outliers: analysis.outliers.clone(),
                error: analysis.error.clone(),
            })
            .collect(),
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
