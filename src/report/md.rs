use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Code Grade\n\n");
    output.push_str(&format!("File: `{}`\n\n", report.path));
    output.push_str(&format!("Final score: **{:.1}**\n\n", report.final_score));
    output.push_str("## Signals\n\n");
    output.push_str(&format!(
        "- static analysis (deterministic): {:.1}\n",
        report.deterministic
    ));
    output.push_str(&format!("- review (heuristic): {:.1}\n", report.heuristic));
    match report.diagnostics {
        Some(count) => output.push_str(&format!("- diagnostics counted: {count}\n")),
        None => output.push_str("- diagnostics counted: analyzer unavailable\n"),
    }
    output.push_str(&format!(
        "\nGenerated at {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_report_contains_sections() {
        let report = ScoreReport::new("driver.c", 88.0, 72.0, 75.2, Some(2));
        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Code Grade"));
        assert!(rendered.contains("## Signals"));
        assert!(rendered.contains("Final score: **75.2**"));
        assert!(rendered.contains("diagnostics counted: 2"));
    }

    #[test]
    fn markdown_notes_analyzer_absence() {
        let report = ScoreReport::new("driver.c", 100.0, 50.0, 60.0, None);
        let rendered = to_markdown(&report);
        assert!(rendered.contains("analyzer unavailable"));
    }
}
