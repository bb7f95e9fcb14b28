//! Scaled score calculation.
//!
//! Turns a raw correct-answer count into a calibrated scaled score by
//! looking it up in a band table and rounding the band midpoint to a
//! multiple of ten. Scoring never fails: every degenerate or out-of-domain
//! input produces [`MIN_SCALED_SCORE`].

use serde::{Deserialize, Serialize};

use crate::bands::{Bounds, ScoreBandTable, Subject, TestScope};
use crate::model::SectionAnalysis;

/// Lowest reportable scaled score.
pub const MIN_SCALED_SCORE: i32 = 200;

/// Questions a complete Math full test carries.
pub const FULL_TEST_MATH_QUESTIONS: f64 = 44.0;

/// Questions a complete Verbal full test carries.
pub const FULL_TEST_VERBAL_QUESTIONS: f64 = 54.0;

/// How a score was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Zero correct answers or zero questions; no lookup was made.
    NothingToScore,
    /// The effective count hit a band.
    Banded { bounds: Bounds },
    /// The effective count fell outside the table.
    OutOfDomain,
}

/// A scaled score with the intermediate values that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub subject: Subject,
    pub table: TestScope,
    /// Raw correct count after clamping negatives.
    pub raw_correct: i32,
    /// Count used for the lookup, after proration.
    pub effective_correct: i32,
    pub outcome: ScoreOutcome,
    pub scaled_score: i32,
}

/// Round to a multiple of ten; a remainder of 1..=5 rounds down, 6..=9 up.
///
/// Negative values use truncating remainder, so they always move toward zero.
pub fn round_to_next_10(value: i32) -> i32 {
    let rem = value % 10;
    if rem == 0 {
        value
    } else if rem > 5 {
        (value / 10 + 1).saturating_mul(10)
    } else {
        (value / 10) * 10
    }
}

/// Math if either hint mentions "math" (case-insensitive), otherwise Verbal.
///
/// The second hint is only consulted when the first does not match.
pub fn detect_subject(hint: &str, fallback_hint: &str) -> Subject {
    let is_math = |s: &str| s.to_lowercase().contains("math");
    if is_math(hint) || (!fallback_hint.is_empty() && is_math(fallback_hint)) {
        Subject::Math
    } else {
        Subject::Verbal
    }
}

fn expected_full_test_questions(subject: Subject) -> f64 {
    match subject {
        Subject::Math => FULL_TEST_MATH_QUESTIONS,
        Subject::Verbal => FULL_TEST_VERBAL_QUESTIONS,
    }
}

/// Compute a scaled score on the full-test tables and report every step.
///
/// `is_full_test` only controls proration: a partial attempt is rescaled to
/// the full-test question count before the lookup.
pub fn score_breakdown(
    raw_correct: i32,
    raw_total: f64,
    subject_hint: &str,
    fallback_hint: &str,
    is_full_test: bool,
) -> ScoreBreakdown {
    let subject = detect_subject(subject_hint, fallback_hint);
    let table = ScoreBandTable::for_test(subject, TestScope::Full);
    let expected = is_full_test.then(|| expected_full_test_questions(subject));
    breakdown_on(table, raw_correct, raw_total, expected)
}

/// Score a single sectional module on the sectional tables. No proration.
pub fn sectional_score_breakdown(
    raw_correct: i32,
    raw_total: f64,
    subject_hint: &str,
    fallback_hint: &str,
) -> ScoreBreakdown {
    let subject = detect_subject(subject_hint, fallback_hint);
    let table = ScoreBandTable::for_test(subject, TestScope::Sectional);
    breakdown_on(table, raw_correct, raw_total, None)
}

fn breakdown_on(
    table: &ScoreBandTable,
    raw_correct: i32,
    raw_total: f64,
    prorate_to: Option<f64>,
) -> ScoreBreakdown {
    let raw_correct = raw_correct.max(0);
    let subject = table.subject();

    if raw_correct == 0 || raw_total == 0.0 {
        return ScoreBreakdown {
            subject,
            table: table.scope(),
            raw_correct,
            effective_correct: raw_correct,
            outcome: ScoreOutcome::NothingToScore,
            scaled_score: MIN_SCALED_SCORE,
        };
    }

    let mut effective_correct = raw_correct;
    if let Some(expected) = prorate_to {
        if raw_total != expected {
            // Truncates toward zero.
            effective_correct = (f64::from(raw_correct) / raw_total * expected) as i32;
        }
    }

    let bounds = u32::try_from(effective_correct)
        .ok()
        .and_then(|key| table.lookup(key));

    let (outcome, scaled_score) = match bounds {
        Some(bounds) => (
            ScoreOutcome::Banded { bounds },
            round_to_next_10(bounds.midpoint()),
        ),
        None => {
            tracing::debug!(
                "raw count {effective_correct} outside {} {:?} table (max {})",
                subject,
                table.scope(),
                table.max_key()
            );
            (ScoreOutcome::OutOfDomain, MIN_SCALED_SCORE)
        }
    };

    ScoreBreakdown {
        subject,
        table: table.scope(),
        raw_correct,
        effective_correct,
        outcome,
        scaled_score,
    }
}

/// Scaled score for a raw correct count.
///
/// `subject_hint` and `fallback_hint` are free text (usually section names)
/// searched for "math" to choose between the Math and Verbal tables.
pub fn scaled_score(
    raw_correct: i32,
    raw_total: f64,
    subject_hint: &str,
    fallback_hint: &str,
    is_full_test: bool,
) -> i32 {
    score_breakdown(raw_correct, raw_total, subject_hint, fallback_hint, is_full_test).scaled_score
}

/// Scaled score for one extracted section, using its name as the subject hint.
pub fn section_scaled_score(analysis: &SectionAnalysis, is_full_test: bool) -> i32 {
    scaled_score(
        i32::try_from(analysis.correct).unwrap_or(i32::MAX),
        f64::from(analysis.total_ques),
        &analysis.section_name,
        "",
        is_full_test,
    )
}

/// Score a section made of two equal modules from one module's counts.
///
/// The counts are doubled, scored, and the result halved and rounded again.
pub fn combined_module_score(
    module_correct: i32,
    module_total: f64,
    subject_hint: &str,
    fallback_hint: &str,
) -> i32 {
    let doubled = scaled_score(
        module_correct.saturating_mul(2),
        module_total * 2.0,
        subject_hint,
        fallback_hint,
        false,
    );
    round_to_next_10(doubled / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounding_examples() {
        assert_eq!(round_to_next_10(25), 20);
        assert_eq!(round_to_next_10(26), 30);
        assert_eq!(round_to_next_10(30), 30);
        assert_eq!(round_to_next_10(695), 700);
        assert_eq!(round_to_next_10(392), 390);
        assert_eq!(round_to_next_10(0), 0);
    }

    #[test]
    fn zero_correct_or_zero_total_is_minimum() {
        assert_eq!(scaled_score(0, 44.0, "Math", "", false), 200);
        assert_eq!(scaled_score(10, 0.0, "Math", "", false), 200);
        assert_eq!(scaled_score(-5, 44.0, "Math", "", true), 200);
    }

    #[test]
    fn full_math_band_lookup() {
        assert_eq!(scaled_score(38, 44.0, "Math 1", "", false), 700);
        let breakdown = score_breakdown(38, 44.0, "Math 1", "", false);
        assert_eq!(breakdown.table, TestScope::Full);
        assert_eq!(
            breakdown.outcome,
            ScoreOutcome::Banded {
                bounds: Bounds {
                    lower: 690,
                    upper: 700
                }
            }
        );
    }

    #[test]
    fn subject_detection() {
        assert_eq!(detect_subject("MATHEMATICS", ""), Subject::Math);
        assert_eq!(detect_subject("Reading", "Math Module 2"), Subject::Math);
        assert_eq!(detect_subject("Reading", ""), Subject::Verbal);
        assert_eq!(detect_subject("", ""), Subject::Verbal);
    }

    #[test]
    fn full_test_prorates_with_truncation() {
        let b = score_breakdown(11, 22.0, "Math", "", true);
        assert_eq!(b.effective_correct, 22);
        assert_eq!(b.scaled_score, 450);

        // 5 / 7 * 54 = 38.57
        let b = score_breakdown(5, 7.0, "Reading", "", true);
        assert_eq!(b.effective_correct, 38);
        assert_eq!(b.scaled_score, 580);
    }

    #[test]
    fn full_test_at_expected_total_skips_proration() {
        let b = score_breakdown(44, 44.0, "Math", "", true);
        assert_eq!(b.effective_correct, 44);
        assert_eq!(b.scaled_score, 800);
        assert_eq!(scaled_score(54, 54.0, "Verbal", "", true), 800);
    }

    #[test]
    fn non_full_test_uses_full_tables() {
        // Full Math key 20 is (420, 430).
        let b = score_breakdown(20, 20.0, "Math", "", false);
        assert_eq!(b.table, TestScope::Full);
        assert_eq!(b.effective_correct, 20);
        assert_eq!(b.scaled_score, 420);
        assert_eq!(
            scaled_score(22, 23.0, "Math", "", false),
            scaled_score(22, 22.0, "Math", "", false)
        );
    }

    #[test]
    fn sectional_tables_for_single_module() {
        let b = sectional_score_breakdown(19, 22.0, "Math", "");
        assert_eq!(b.table, TestScope::Sectional);
        assert_eq!(b.scaled_score, 370);
        assert_eq!(
            sectional_score_breakdown(25, 27.0, "Reading and Writing", "").scaled_score,
            390
        );
        assert_eq!(sectional_score_breakdown(0, 22.0, "Math", "").scaled_score, 200);
    }

    #[test]
    fn out_of_domain_is_minimum() {
        let b = sectional_score_breakdown(30, 22.0, "Math", "");
        assert_eq!(b.outcome, ScoreOutcome::OutOfDomain);
        assert_eq!(b.scaled_score, 200);
        assert_eq!(scaled_score(60, 54.0, "Reading", "", true), 200);
    }

    #[test]
    fn combined_modules_halve_the_doubled_score() {
        assert_eq!(combined_module_score(19, 22.0, "Math 1", ""), 350);
        assert_eq!(combined_module_score(0, 22.0, "Math 1", ""), 100);
    }

    #[test]
    fn section_score_uses_section_name() {
        let analysis = SectionAnalysis {
            section_name: "Math Module 1".into(),
            correct: 19,
            total_ques: 22,
            ..Default::default()
        };
        // Full Math key 19 is (410, 420).
        assert_eq!(section_scaled_score(&analysis, false), 410);
    }

    proptest! {
        #[test]
        fn rounding_is_idempotent(x in any::<i32>()) {
            let once = round_to_next_10(x);
            prop_assert_eq!(round_to_next_10(once), once);
        }

        #[test]
        fn score_is_always_in_range(
            correct in -10i32..100,
            total in 0u32..120,
            full in any::<bool>(),
            math in any::<bool>(),
        ) {
            let hint = if math { "Math" } else { "Reading" };
            let s = scaled_score(correct, f64::from(total), hint, "", full);
            prop_assert!((200..=800).contains(&s), "score {} out of range", s);
            prop_assert_eq!(s % 10, 0);
        }

        #[test]
        fn more_questions_never_raise_the_score(
            total in 1u32..80,
            extra in 1u32..20,
            correct_frac in 0.0f64..=1.0,
            full in any::<bool>(),
            sectional in any::<bool>(),
            math in any::<bool>(),
        ) {
            let hint = if math { "Math" } else { "Reading" };
            let correct = (f64::from(total) * correct_frac) as i32;
            let score = |t: u32| {
                if sectional {
                    sectional_score_breakdown(correct, f64::from(t), hint, "").scaled_score
                } else {
                    scaled_score(correct, f64::from(t), hint, "", full)
                }
            };
            let smaller = score(total);
            let larger = score(total + extra);
            prop_assert!(
                larger <= smaller,
                "{} correct: total {} -> {}, total {} -> {}",
                correct, total, smaller, total + extra, larger
            );
        }
    }
}
