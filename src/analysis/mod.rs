//! Analysis module - the statistical core of the EDA pipeline

pub mod classify;
pub mod clt;
pub mod column;
pub mod coverage;
pub mod describe;
pub mod error;
pub mod interval;
pub mod loader;
pub mod missing;
pub mod outliers;
pub mod resample;

pub use classify::*;
pub use clt::*;
pub use column::*;
pub use coverage::*;
pub use describe::*;
pub use error::AnalysisError;
pub use interval::*;
pub use loader::*;
pub use missing::*;
pub use outliers::*;
pub use resample::*;
