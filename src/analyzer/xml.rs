//! cppcheck XML report deserialization.
//!
//! The report shape (version 2):
//!
//! ```xml
//! <results version="2">
//!   <cppcheck version="2.13"/>
//!   <errors>
//!     <error id="uninitvar" severity="error" msg="..." verbose="...">
//!       <location file="driver.c" line="12" column="5"/>
//!     </error>
//!   </errors>
//! </results>
//! ```

use crate::types::diagnostic::{Diagnostic, DiagnosticReport, Severity};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawResults {
    // cppcheck always writes the <errors> element, even when empty;
    // requiring it makes arbitrary non-report XML fail to parse.
    errors: RawErrors,
}

#[derive(Debug, Deserialize)]
struct RawErrors {
    #[serde(default, rename = "error")]
    errors: Vec<RawError>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    #[serde(rename = "@id")]
    id: String,
    #[serde(default, rename = "@severity")]
    severity: Severity,
    #[serde(default, rename = "@msg")]
    msg: String,
    #[serde(default, rename = "@verbose")]
    verbose: Option<String>,
    #[serde(default, rename = "location")]
    locations: Vec<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default, rename = "@file")]
    file: String,
    #[serde(default, rename = "@line")]
    line: u32,
    #[serde(default, rename = "@column")]
    column: u32,
}

/// Parses a cppcheck XML report into a DiagnosticReport. `Err` here means
/// the output was not a well-formed report; callers treat that the same
/// as the analyzer failing to run.
pub fn parse_report(xml: &str) -> Result<DiagnosticReport, quick_xml::DeError> {
    let raw: RawResults = quick_xml::de::from_str(xml)?;
    let diagnostics = raw.errors.errors.into_iter().map(into_diagnostic).collect();
    Ok(DiagnosticReport { diagnostics })
}

fn into_diagnostic(raw: RawError) -> Diagnostic {
    // cppcheck can attach several locations (e.g. allocation + leak site);
    // the first is the primary one. A missing location means the finding
    // is about the run, not a source position.
    let location = raw.locations.into_iter().next();
    let message = if raw.msg.is_empty() {
        raw.verbose.unwrap_or_default()
    } else {
        raw.msg
    };
    Diagnostic {
        severity: raw.severity,
        id: raw.id,
        message,
        file: location
            .as_ref()
            .map(|loc| loc.file.clone())
            .unwrap_or_default(),
        line: location.as_ref().map(|loc| loc.line).unwrap_or(0),
        column: location.map(|loc| loc.column).unwrap_or(0),
    }
}
