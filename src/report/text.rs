use crate::types::report::ScoreReport;

pub fn to_text(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "static analysis score (deterministic): {}\n",
        trim_score(report.deterministic)
    ));
    output.push_str(&format!(
        "review score (heuristic): {}\n",
        trim_score(report.heuristic)
    ));
    output.push_str(&format!("final score: {}", trim_score(report.final_score)));
    output
}

/// Whole scores print without a fractional part; combined ones keep it.
fn trim_score(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_prints_all_three_scores() {
        let report = ScoreReport::new("driver.c", 88.0, 72.0, 75.2, Some(2));
        let rendered = to_text(&report);
        assert!(rendered.contains("static analysis score (deterministic): 88"));
        assert!(rendered.contains("review score (heuristic): 72"));
        assert!(rendered.contains("final score: 75.2"));
    }
}
