//! Exam-wide aggregate statistics.
//!
//! Rolls section counters up into exam totals and scores each subject by
//! pooling the raw counts of every section whose name maps to it.

use serde::{Deserialize, Serialize};

use crate::bands::Subject;
use crate::model::{ExamAnalysis, SectionReport};
use crate::scoring::{detect_subject, scaled_score, section_scaled_score};

/// Aggregate statistics across all sections of one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamStatistics {
    pub totals: Totals,
    /// Per-section statistics, in document order.
    pub per_section: Vec<SectionStats>,
    /// Per-subject scores, Math before Verbal, only subjects present.
    pub per_subject: Vec<SubjectScore>,
    /// Sum of the subject scores; `None` when the exam has no sections.
    pub total_scaled_score: Option<i32>,
    /// Whether partial attempts were prorated to a full test.
    pub full_test: bool,
}

/// Summed counters over every section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub questions: u32,
    pub attempted: u32,
    pub un_attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub mark_for_review: u32,
    /// Questions whose status matched no known category.
    pub unrecognized: u32,
    /// Correct over attempted, 0.0 when nothing was attempted.
    pub accuracy: f64,
}

/// Statistics for a single section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStats {
    pub name: String,
    pub subject: Subject,
    pub accuracy: f64,
    pub scaled_score: i32,
}

/// Pooled counts and scaled score for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: Subject,
    pub sections: Vec<String>,
    pub correct: u32,
    pub total_questions: u32,
    pub scaled_score: i32,
}

/// Compute aggregate statistics from an extracted exam.
pub fn compute_exam_statistics(analysis: &ExamAnalysis, full_test: bool) -> ExamStatistics {
    let mut totals = Totals::default();
    for section in &analysis.sections {
        let a = &section.analysis;
        totals.questions += a.total_ques;
        totals.attempted += a.attempted;
        totals.un_attempted += a.un_attempted;
        totals.correct += a.correct;
        totals.incorrect += a.incorrect;
        totals.mark_for_review += a.mark_for_review;
        totals.unrecognized += section.unrecognized().count() as u32;
    }
    if totals.attempted > 0 {
        totals.accuracy = totals.correct as f64 / totals.attempted as f64;
    }

    let per_section = analysis
        .sections
        .iter()
        .map(|s| SectionStats {
            name: s.name.clone(),
            subject: detect_subject(&s.name, ""),
            accuracy: s.analysis.accuracy(),
            scaled_score: section_scaled_score(&s.analysis, full_test),
        })
        .collect();

    let per_subject: Vec<SubjectScore> = [Subject::Math, Subject::Verbal]
        .into_iter()
        .filter_map(|subject| subject_score(&analysis.sections, subject, full_test))
        .collect();

    let total_scaled_score = if per_subject.is_empty() {
        None
    } else {
        Some(per_subject.iter().map(|s| s.scaled_score).sum())
    };

    ExamStatistics {
        totals,
        per_section,
        per_subject,
        total_scaled_score,
        full_test,
    }
}

fn subject_score(sections: &[SectionReport], subject: Subject, full_test: bool) -> Option<SubjectScore> {
    let members: Vec<&SectionReport> = sections
        .iter()
        .filter(|s| detect_subject(&s.name, "") == subject)
        .collect();
    if members.is_empty() {
        return None;
    }

    let correct: u32 = members.iter().map(|s| s.analysis.correct).sum();
    let total_questions: u32 = members.iter().map(|s| s.analysis.total_ques).sum();
    let hint = match subject {
        Subject::Math => "math",
        Subject::Verbal => "verbal",
    };

    Some(SubjectScore {
        subject,
        sections: members.iter().map(|s| s.name.clone()).collect(),
        correct,
        total_questions,
        scaled_score: scaled_score(
            i32::try_from(correct).unwrap_or(i32::MAX),
            f64::from(total_questions),
            hint,
            "",
            full_test,
        ),
    })
}
