pub mod extract;
pub mod penalty;

use crate::types::Score;

/// Weight of the static-analysis signal in the final grade. Kept low on
/// purpose: cppcheck only measures superficial issues.
pub const STATIC_WEIGHT: f32 = 0.2;
/// Weight of the review signal, the primary quality judgment.
pub const NARRATIVE_WEIGHT: f32 = 0.8;

/// Combines the deterministic and heuristic scores into the final grade.
/// Both inputs are already bounded to [0, 100] and the weights sum to 1,
/// so the result needs no clamping.
pub fn combine(deterministic: Score, heuristic: Score) -> Score {
    deterministic * STATIC_WEIGHT + heuristic * NARRATIVE_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::diagnostic::{Diagnostic, DiagnosticReport, Severity};

    #[test]
    fn combine_weights_narrative_four_to_one() {
        assert_eq!(combine(100.0, 50.0), 60.0);
    }

    #[test]
    fn combine_preserves_bounds() {
        assert_eq!(combine(0.0, 0.0), 0.0);
        assert_eq!(combine(100.0, 100.0), 100.0);
    }

    #[test]
    fn full_pipeline_matches_hand_computed_grade() {
        let report = DiagnosticReport {
            diagnostics: vec![
                Diagnostic {
                    severity: Severity::Error,
                    id: "uninitvar".to_string(),
                    message: "Uninitialized variable: x".to_string(),
                    file: "driver.c".to_string(),
                    line: 12,
                    column: 5,
                },
                Diagnostic {
                    severity: Severity::Style,
                    id: "unusedVar".to_string(),
                    message: "Unused variable: tmp".to_string(),
                    file: "driver.c".to_string(),
                    line: 30,
                    column: 9,
                },
            ],
        };

        let deterministic = penalty::penalty_score(Some(&report));
        assert_eq!(deterministic, 88.0);

        let heuristic = extract::extract_score("Overall score: 72/100");
        assert_eq!(heuristic, 72.0);

        let final_score = combine(deterministic, heuristic);
        assert!((final_score - 75.2).abs() < 1e-4);
    }
}
