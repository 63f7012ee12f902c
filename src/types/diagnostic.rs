use serde::Deserialize;

/// Severity classes emitted by cppcheck. Anything the analyzer invents
/// beyond these collapses into `Other` and is penalized at the minimum
/// weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Style,
    Performance,
    Portability,
    Information,
    #[default]
    #[serde(other)]
    Other,
}

/// A single static-analysis finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub id: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// The full set of findings for one analyzer run. Absence of a report
/// (the analyzer could not run or its output was unreadable) is modeled
/// as `Option<DiagnosticReport>` at the call sites, distinct from an
/// empty report even though both score identically.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}
