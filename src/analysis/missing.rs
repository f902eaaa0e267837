//! Missing value profile

use polars::prelude::*;
use serde::Serialize;

/// Null statistics for one column.
#[derive(Debug, Clone, Serialize)]
pub struct MissingProfile {
    pub column: String,
    pub missing: usize,
    pub percent: f64,
}

/// Profile missing values across the dataset.
///
/// Returns one entry per column that has at least one null, sorted by missing
/// percentage descending. An empty dataset yields an empty profile.
pub fn missing_value_profile(df: &DataFrame) -> Vec<MissingProfile> {
    if df.height() == 0 {
        return Vec::new();
    }

    let mut profiles: Vec<MissingProfile> = df
        .get_columns()
        .iter()
        .filter_map(|column| {
            let missing = column.null_count();
            if missing == 0 {
                return None;
            }
            Some(MissingProfile {
                column: column.name().to_string(),
                missing,
                percent: missing as f64 / df.height() as f64 * 100.0,
            })
        })
        .collect();

    profiles.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(std::cmp::Ordering::Equal));
    profiles
}
