//! Edastat: Exploratory Data Analysis Library
//!
//! A library for exploratory analysis of tabular datasets: column
//! classification, confidence interval simulation, Central Limit Theorem
//! demonstration, and IQR-based outlier detection.

pub mod analysis;
pub mod cli;
pub mod report;
pub mod utils;
