//! Shared test utilities and fixture generators

use polars::prelude::*;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a test DataFrame with known characteristics
///
/// This DataFrame includes:
/// - `measurement`: continuous numeric column (30 distinct values)
/// - `skewed`: right-skewed numeric column
/// - `flag`: numeric 0/1 code (should classify as categorical)
/// - `category`: string column
/// - `with_missing`: numeric column with nulls
#[allow(dead_code)]
pub fn create_eda_test_dataframe() -> DataFrame {
    let measurement: Vec<f64> = (0..30).map(|i| 10.0 + i as f64 * 0.5).collect();
    let skewed: Vec<f64> = (0..30).map(|i| (i as f64 / 3.0).exp()).collect();
    let flag: Vec<i32> = (0..30).map(|i| i % 2).collect();
    let category: Vec<&str> = (0..30).map(|i| if i % 3 == 0 { "a" } else { "b" }).collect();
    let with_missing: Vec<Option<f64>> = (0..30)
        .map(|i| if i % 5 == 0 { None } else { Some(i as f64) })
        .collect();

    df! {
        "measurement" => measurement,
        "skewed" => skewed,
        "flag" => flag,
        "category" => category,
        "with_missing" => with_missing,
    }
    .unwrap()
}

/// Draw a seeded synthetic population from a normal distribution.
#[allow(dead_code)]
pub fn normal_population(mean: f64, std: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Sample standard deviation (Bessel-corrected) of a slice.
#[allow(dead_code)]
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq_dev = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (sum_sq_dev / (n - 1.0)).sqrt()
}

/// Create a temporary directory with a test CSV file
#[allow(dead_code)]
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
