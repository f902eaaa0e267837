//! Tests for dataset loading

use edastat::analysis::load_dataset;
use std::io::Write;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_roundtrip() {
    let mut df = common::create_eda_test_dataframe();
    let (_tmp, csv_path) = common::create_temp_csv(&mut df);

    let loaded = load_dataset(&csv_path, 100).unwrap();

    assert_eq!(loaded.shape(), df.shape());
    let names: Vec<String> = loaded
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(names.contains(&"measurement".to_string()));
    assert!(names.contains(&"category".to_string()));
}

#[test]
fn test_unsupported_extension_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("data.xlsx");
    std::fs::write(&path, b"not a real spreadsheet").unwrap();

    let err = load_dataset(&path, 100).unwrap_err();
    assert!(
        err.to_string().contains("Unsupported file format"),
        "Got: {}",
        err
    );
}

#[test]
fn test_missing_file_fails_with_path_in_message() {
    let err = load_dataset(std::path::Path::new("/nonexistent/data.csv"), 100).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("data.csv"), "Error should name the file: {}", chain);
}

#[test]
fn test_malformed_csv_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("broken.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    // Ragged rows: second data row has an extra field
    writeln!(file, "a,b").unwrap();
    writeln!(file, "1,2").unwrap();
    writeln!(file, "3,4,5").unwrap();
    drop(file);

    assert!(load_dataset(&path, 100).is_err());
}
