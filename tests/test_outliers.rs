//! Unit tests for IQR outlier detection

use edastat::analysis::{outliers, AnalysisError};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_linear_interpolation_quartiles() {
    let column = Column::new("x".into(), [1.0f64, 2.0, 3.0, 4.0, 5.0, 100.0]);
    let report = outliers::detect(&column).unwrap();

    assert!((report.q1 - 2.25).abs() < 1e-12, "Q1 should be 2.25, got {}", report.q1);
    assert!((report.q3 - 4.75).abs() < 1e-12, "Q3 should be 4.75, got {}", report.q3);
    assert!((report.iqr - 2.5).abs() < 1e-12);
    assert!((report.lower_fence + 1.5).abs() < 1e-12);
    assert!((report.upper_fence - 8.5).abs() < 1e-12);
    assert_eq!(report.outlier_count, 1, "Exactly one outlier (100) expected");
    assert_eq!(report.outlier_rows, vec![5]);
}

#[test]
fn test_no_outliers_in_uniform_data() {
    let values: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let column = Column::new("uniform".into(), values);
    let report = outliers::detect(&column).unwrap();

    assert_eq!(report.outlier_count, 0);
    assert!(report.outlier_rows.is_empty());
}

#[test]
fn test_constant_column_flags_any_deviation() {
    // Degenerate IQR = 0: fences collapse onto the constant, any deviation is
    // an outlier rather than an error
    let column = Column::new(
        "mostly_constant".into(),
        [5.0f64, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.1],
    );
    let report = outliers::detect(&column).unwrap();

    assert_eq!(report.iqr, 0.0);
    assert_eq!(report.lower_fence, 5.0);
    assert_eq!(report.upper_fence, 5.0);
    assert_eq!(report.outlier_count, 1);
    assert_eq!(report.outlier_rows, vec![8]);
}

#[test]
fn test_outlier_rows_index_original_column() {
    // Nulls occupy row positions but are never outliers
    let column = Column::new(
        "x".into(),
        [None, Some(1.0f64), Some(2.0), Some(3.0), Some(4.0), Some(5.0), None, Some(100.0)],
    );
    let report = outliers::detect(&column).unwrap();

    assert_eq!(report.outlier_rows, vec![7]);
}

#[test]
fn test_batch_skips_failed_columns() {
    let df = df! {
        "clean" => (0..20).map(|i| i as f64).collect::<Vec<_>>(),
        "spiky" => (0..20).map(|i| if i == 19 { 1000.0 } else { i as f64 }).collect::<Vec<_>>(),
        "all_null" => std::iter::repeat(None::<f64>).take(20).collect::<Vec<_>>(),
    }
    .unwrap();

    let cols = vec![
        "clean".to_string(),
        "spiky".to_string(),
        "all_null".to_string(),
    ];
    let results = outliers::detect_all(&df, &cols);

    assert_eq!(results.len(), 3, "Batch must report every column");

    let clean = results.iter().find(|(n, _)| n == "clean").unwrap();
    assert_eq!(clean.1.as_ref().unwrap().outlier_count, 0);

    let spiky = results.iter().find(|(n, _)| n == "spiky").unwrap();
    assert_eq!(spiky.1.as_ref().unwrap().outlier_count, 1);

    let all_null = results.iter().find(|(n, _)| n == "all_null").unwrap();
    assert!(matches!(
        all_null.1.as_ref().unwrap_err(),
        AnalysisError::EmptyColumn { .. }
    ));
}

#[test]
fn test_fixture_outliers() {
    let df = common::create_eda_test_dataframe();
    let column = df.column("skewed").unwrap();
    let report = outliers::detect(column).unwrap();

    // The exponential tail produces at least one flagged row
    assert!(report.outlier_count > 0);
    assert_eq!(report.outlier_count, report.outlier_rows.len());
}
