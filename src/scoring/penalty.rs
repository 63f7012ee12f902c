use crate::types::diagnostic::{DiagnosticReport, Severity};
use crate::types::Score;

/// Diagnostic ids that never contribute penalty regardless of severity.
/// Both are cppcheck meta-findings about the run itself, not the code.
pub const EXCLUDED_IDS: [&str; 2] = ["checkersReport", "missingIncludeSystem"];

/// Penalty weight per severity class. Unknown classes cost the minimum.
pub fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::Error => 10,
        Severity::Warning => 5,
        Severity::Style => 2,
        Severity::Performance => 3,
        Severity::Portability => 2,
        Severity::Information => 1,
        Severity::Other => 1,
    }
}

/// Converts a diagnostic report into a score in [0, 100].
///
/// A missing report (the analyzer could not run or its output was
/// unreadable) scores the same as an empty one: a perfect 100. That is a
/// deliberate optimistic default, so "tool crashed" is indistinguishable
/// from "tool found nothing" at this layer.
pub fn penalty_score(report: Option<&DiagnosticReport>) -> Score {
    let Some(report) = report else {
        return 100.0;
    };

    let total_penalty: u32 = report
        .diagnostics
        .iter()
        .filter(|diag| !EXCLUDED_IDS.contains(&diag.id.as_str()))
        .map(|diag| severity_weight(diag.severity))
        .sum();

    (100.0 - total_penalty as f32).max(0.0)
}
