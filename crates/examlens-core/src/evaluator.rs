//! Answer correctness evaluation.

use crate::model::SKIPPED_ANSWER;

/// Compare a chosen option against the report's right-answer annotation.
///
/// The annotation normally reads `"<option>.<text>"` (e.g. `"3. Apple"`);
/// the part before the first `.` is the option token. Without a `.` the
/// whole annotation is the token. Both sides are trimmed and compared
/// case-sensitively. A blank or skipped answer is never correct.
pub fn is_correct(correct_annotation: &str, chosen_answer: &str) -> bool {
    let chosen = chosen_answer.trim();
    if chosen.is_empty() || chosen == SKIPPED_ANSWER {
        return false;
    }

    let token = correct_annotation
        .split_once('.')
        .map_or(correct_annotation, |(option, _)| option)
        .trim();

    token == chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_option_number() {
        assert!(is_correct("3. Apple", "3"));
        assert!(!is_correct("3. Apple", "4"));
    }

    #[test]
    fn empty_answer_never_matches() {
        assert!(!is_correct("3. Apple", ""));
        assert!(!is_correct("", ""));
        assert!(!is_correct("  ", "   "));
    }

    #[test]
    fn skip_marker_never_matches() {
        assert!(!is_correct("--", "--"));
        assert!(!is_correct("--. nothing", "--"));
    }

    #[test]
    fn no_period_falls_back_to_literal() {
        assert!(is_correct("Apple", "Apple"));
        assert!(is_correct("  Apple ", "Apple"));
        assert!(!is_correct("Apple", "apple"));
    }

    #[test]
    fn only_first_period_splits() {
        assert!(is_correct(" 2 . 3.5 meters", "2"));
        assert!(!is_correct("2.5", "2.5"));
    }

    #[test]
    fn missing_annotation_does_not_match_answer() {
        assert!(!is_correct("", "3"));
    }
}
