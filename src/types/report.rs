use crate::types::Score;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the renderers need about one scored file.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub path: String,
    /// PenaltyScorer output (static-analysis signal).
    pub deterministic: Score,
    /// NarrativeScoreExtractor output (review signal).
    pub heuristic: Score,
    /// Weighted combination of the two.
    pub final_score: Score,
    /// Number of diagnostics behind the deterministic score; `None` when
    /// the analyzer could not produce a report.
    pub diagnostics: Option<usize>,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    pub fn new(
        path: impl Into<String>,
        deterministic: Score,
        heuristic: Score,
        final_score: Score,
        diagnostics: Option<usize>,
    ) -> Self {
        Self {
            path: path.into(),
            deterministic,
            heuristic,
            final_score,
            diagnostics,
            generated_at: Utc::now(),
        }
    }
}
