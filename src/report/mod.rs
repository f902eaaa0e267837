//! Report module - summaries, sinks, and exports of analysis results

pub mod export;
pub mod sink;
pub mod summary;

pub use export::*;
pub use sink::*;
pub use summary::*;
