use crate::types::Score;
use regex::Regex;
use std::sync::LazyLock;

/// Returned when no pattern yields a usable value: a neutral prior,
/// "no signal found", not an error.
pub const NEUTRAL_SCORE: Score = 50.0;

/// Pattern chain in strict priority order. A text can satisfy several of
/// these with different values, so order matters: an explicit
/// "score:"/"rating:" label beats a bare "N/100" beats a bare "N%".
static SCORE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:score|rating)[:\s]*(\d+)(?:/100)?").expect("label pattern compiles"),
        Regex::new(r"(?i)(\d+)/100").expect("fraction pattern compiles"),
        Regex::new(r"(?i)(\d+)%").expect("percent pattern compiles"),
    ]
});

/// Pulls a 0-100 score out of free-form review text.
///
/// Each pattern is tried in priority order against the whole text; only
/// its first match counts. A match that parses out of range (or does not
/// fit in an integer at all) rejects that pattern and evaluation falls
/// through to the next one, never to a later match of the same pattern.
pub fn extract_score(text: &str) -> Score {
    for pattern in SCORE_PATTERNS.iter() {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };
        if let Ok(value) = captures[1].parse::<u32>() {
            if value <= 100 {
                return value as Score;
            }
        }
    }
    NEUTRAL_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_score_with_denominator() {
        assert_eq!(extract_score("Score: 87/100"), 87.0);
    }

    #[test]
    fn labeled_rating_without_denominator() {
        assert_eq!(extract_score("My rating 93 overall"), 93.0);
    }

    #[test]
    fn bare_fraction_matches_second_pattern() {
        assert_eq!(extract_score("I would give this 64/100 overall."), 64.0);
    }

    #[test]
    fn bare_percent_matches_last_pattern() {
        assert_eq!(extract_score("quality sits around 75% here"), 75.0);
    }

    #[test]
    fn out_of_range_label_falls_through_to_default() {
        assert_eq!(extract_score("Rating: 150"), NEUTRAL_SCORE);
    }

    #[test]
    fn out_of_range_label_falls_through_to_next_pattern() {
        // The label match (150) is rejected, not terminal; the fraction
        // pattern still gets its chance.
        assert_eq!(extract_score("Rating: 150 but honestly 60/100"), 60.0);
    }

    #[test]
    fn no_numeric_content_yields_neutral_default() {
        assert_eq!(extract_score("no numeric content here"), NEUTRAL_SCORE);
    }

    #[test]
    fn label_pattern_outranks_percent_pattern() {
        assert_eq!(extract_score("Score: 40 but also 85%"), 40.0);
    }

    #[test]
    fn only_first_match_of_a_pattern_counts() {
        assert_eq!(extract_score("score: 30 ... score: 90"), 30.0);
    }

    #[test]
    fn case_insensitive_labels() {
        assert_eq!(extract_score("SCORE: 55"), 55.0);
        assert_eq!(extract_score("rAtInG: 66"), 66.0);
    }

    #[test]
    fn absurd_digit_runs_fall_through() {
        assert_eq!(extract_score("score: 99999999999999999999"), NEUTRAL_SCORE);
    }
}
