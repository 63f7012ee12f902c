pub mod config;
pub mod diagnostic;
pub mod report;

/// Scores are bounded to [0, 100] by every producer in this crate.
pub type Score = f32;
