pub mod xml;

use crate::types::config::AnalyzerConfig;
use crate::types::diagnostic::DiagnosticReport;
use std::path::Path;
use std::process::Command;

/// Runs the static analyzer over `path` and returns its findings.
///
/// `None` covers the whole failure taxonomy on this side: the binary is
/// not installed, the invocation fails, or the output is not a readable
/// report. Callers score `None` as a perfect 100, so nothing here is an
/// error; failures are logged and swallowed.
pub fn collect(path: &Path, config: &AnalyzerConfig) -> Option<DiagnosticReport> {
    let output = match Command::new(&config.binary)
        .arg(path)
        .arg(format!("--enable={}", config.checks))
        .arg("--xml")
        .arg("-q")
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(binary = %config.binary, %err, "static analyzer could not be invoked");
            return None;
        }
    };

    if !output.status.success() {
        tracing::warn!(status = ?output.status.code(), "static analyzer exited abnormally");
        return None;
    }

    // With --xml -q the report is the only thing written to stderr.
    let report_xml = String::from_utf8_lossy(&output.stderr);
    match xml::parse_report(&report_xml) {
        Ok(report) => {
            tracing::debug!(diagnostics = report.len(), "static analyzer report parsed");
            Some(report)
        }
        Err(err) => {
            tracing::warn!(%err, "static analyzer output was not a readable report");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_binary_yields_absence() {
        let config = AnalyzerConfig {
            binary: "definitely-not-a-real-analyzer".to_string(),
            checks: "all".to_string(),
        };
        assert!(collect(&PathBuf::from("whatever.c"), &config).is_none());
    }
}
