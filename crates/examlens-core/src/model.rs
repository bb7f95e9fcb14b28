//! Core data model types for examlens.
//!
//! These are the records the extractor produces from an exam-report
//! document: candidate metadata, per-question details, and per-section
//! attempt analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw text of the "answered" status.
pub const STATUS_ANSWERED: &str = "Answered";
/// Raw text of the "not answered" status.
pub const STATUS_NOT_ANSWERED: &str = "Not Answered";
/// Raw text of the "answered and flagged for review" status.
pub const STATUS_MARKED_FOR_REVIEW: &str = "Marked For Review";
/// Raw text of the "flagged for review without an answer" status.
pub const STATUS_NOT_ATTEMPTED_MARKED_FOR_REVIEW: &str = "Not Attempted and Marked For Review";

/// Chosen-option value the report uses for a skipped question.
pub const SKIPPED_ANSWER: &str = "--";

/// Candidate identity and exam metadata read from the report header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentExamInfo {
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub exam_date: String,
    #[serde(default)]
    pub exam_time: String,
    #[serde(default)]
    pub subject: String,
}

/// Reported state of a single question.
///
/// Matching is exact on the raw text. Anything else is kept verbatim in
/// [`QuestionStatus::Unrecognized`] so it round-trips through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionStatus {
    Answered,
    NotAnswered,
    /// Answered and flagged for review.
    MarkedForReview,
    /// Flagged for review without an answer.
    NotAttemptedMarkedForReview,
    Unrecognized(String),
}

impl QuestionStatus {
    /// Classify a raw status string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            STATUS_ANSWERED => QuestionStatus::Answered,
            STATUS_NOT_ANSWERED => QuestionStatus::NotAnswered,
            STATUS_MARKED_FOR_REVIEW => QuestionStatus::MarkedForReview,
            STATUS_NOT_ATTEMPTED_MARKED_FOR_REVIEW => QuestionStatus::NotAttemptedMarkedForReview,
            other => QuestionStatus::Unrecognized(other.to_string()),
        }
    }

    /// The raw report text for this status.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionStatus::Answered => STATUS_ANSWERED,
            QuestionStatus::NotAnswered => STATUS_NOT_ANSWERED,
            QuestionStatus::MarkedForReview => STATUS_MARKED_FOR_REVIEW,
            QuestionStatus::NotAttemptedMarkedForReview => STATUS_NOT_ATTEMPTED_MARKED_FOR_REVIEW,
            QuestionStatus::Unrecognized(raw) => raw,
        }
    }

    /// Whether the candidate committed an answer that gets graded.
    pub fn is_attempted(&self) -> bool {
        matches!(
            self,
            QuestionStatus::Answered | QuestionStatus::MarkedForReview
        )
    }

    /// Whether the question carries a review flag.
    pub fn is_marked_for_review(&self) -> bool {
        matches!(
            self,
            QuestionStatus::MarkedForReview | QuestionStatus::NotAttemptedMarkedForReview
        )
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, QuestionStatus::Unrecognized(_))
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for QuestionStatus {
    fn from(raw: String) -> Self {
        QuestionStatus::parse(&raw)
    }
}

impl From<QuestionStatus> for String {
    fn from(status: QuestionStatus) -> Self {
        match status {
            QuestionStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// One question as reported on the exam sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub status: QuestionStatus,
    /// Chosen option, empty or `--` when skipped.
    pub answer: String,
    pub is_correct: bool,
}

/// Question-level detail for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub questions: Vec<Question>,
}

/// Attempt counters for one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    pub section_name: String,
    pub attempted: u32,
    pub un_attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub total_ques: u32,
    #[serde(rename = "markReviewCount")]
    pub mark_for_review: u32,
    /// Not populated by extraction; kept for consumers that assign marks.
    #[serde(default)]
    pub marks: f32,
}

impl SectionAnalysis {
    pub fn new(section_name: impl Into<String>) -> Self {
        Self {
            section_name: section_name.into(),
            ..Default::default()
        }
    }

    /// Fold one question into the counters.
    ///
    /// `total_ques` always increments; an unrecognized status touches
    /// nothing else.
    pub fn record(&mut self, status: &QuestionStatus, is_correct: bool) {
        match status {
            QuestionStatus::Answered => self.record_graded(is_correct),
            QuestionStatus::MarkedForReview => {
                self.mark_for_review += 1;
                self.record_graded(is_correct);
            }
            QuestionStatus::NotAnswered => self.un_attempted += 1,
            QuestionStatus::NotAttemptedMarkedForReview => self.mark_for_review += 1,
            QuestionStatus::Unrecognized(_) => {}
        }
        self.total_ques += 1;
    }

    fn record_graded(&mut self, is_correct: bool) {
        self.attempted += 1;
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Fraction of attempted questions answered correctly, 0.0 when nothing was attempted.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }
}

/// A section's name, counters, and questions in one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub name: String,
    pub analysis: SectionAnalysis,
    pub questions: Vec<Question>,
}

impl SectionReport {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            analysis: SectionAnalysis::new(name.clone()),
            name,
            questions: Vec::new(),
        }
    }

    /// Append a question and update the counters.
    pub fn push(&mut self, question: Question) {
        self.analysis.record(&question.status, question.is_correct);
        self.questions.push(question);
    }

    /// Questions whose status matched none of the known categories.
    pub fn unrecognized(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| !q.status.is_recognized())
    }

    /// The question-level view of this section.
    pub fn to_section(&self) -> Section {
        Section {
            name: self.name.clone(),
            questions: self.questions.clone(),
        }
    }
}

/// Everything extracted from one exam-report document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAnalysis {
    pub exam_info: StudentExamInfo,
    pub sections: Vec<SectionReport>,
}

impl ExamAnalysis {
    /// Section counters in document order.
    pub fn subject_analysis(&self) -> Vec<SectionAnalysis> {
        self.sections.iter().map(|s| s.analysis.clone()).collect()
    }

    /// Question details in document order.
    pub fn section_details(&self) -> Vec<Section> {
        self.sections.iter().map(SectionReport::to_section).collect()
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(status: &str, is_correct: bool) -> Question {
        Question {
            question_id: "q".into(),
            status: QuestionStatus::parse(status),
            answer: "1".into(),
            is_correct,
        }
    }

    #[test]
    fn status_parse_and_display() {
        assert_eq!(QuestionStatus::parse("Answered"), QuestionStatus::Answered);
        assert_eq!(
            QuestionStatus::parse("Not Attempted and Marked For Review"),
            QuestionStatus::NotAttemptedMarkedForReview
        );
        assert_eq!(
            QuestionStatus::parse("answered"),
            QuestionStatus::Unrecognized("answered".into())
        );
        assert_eq!(QuestionStatus::MarkedForReview.to_string(), "Marked For Review");
        assert_eq!(QuestionStatus::Unrecognized("Skipped".into()).to_string(), "Skipped");
    }

    #[test]
    fn status_serializes_as_raw_text() {
        let json = serde_json::to_string(&QuestionStatus::NotAnswered).unwrap();
        assert_eq!(json, "\"Not Answered\"");
        let back: QuestionStatus = serde_json::from_str("\"Weird\"").unwrap();
        assert_eq!(back, QuestionStatus::Unrecognized("Weird".into()));
    }

    #[test]
    fn record_follows_status_rules() {
        let mut report = SectionReport::new("Math");
        report.push(question("Answered", true));
        report.push(question("Answered", false));
        report.push(question("Not Answered", false));
        report.push(question("Marked For Review", true));
        report.push(question("Not Attempted and Marked For Review", false));

        let a = &report.analysis;
        assert_eq!(a.attempted, 3);
        assert_eq!(a.correct, 2);
        assert_eq!(a.incorrect, 1);
        assert_eq!(a.un_attempted, 1);
        assert_eq!(a.mark_for_review, 2);
        assert_eq!(a.total_ques, 5);
        assert_eq!(a.section_name, "Math");
    }

    #[test]
    fn unrecognized_status_only_counts_total() {
        let mut report = SectionReport::new("Verbal");
        report.push(question("Answered", true));
        report.push(question("Bonus", true));

        let a = &report.analysis;
        assert_eq!(a.total_ques, 2);
        assert_eq!(a.attempted, 1);
        assert_eq!(a.correct, 1);
        assert_eq!(report.unrecognized().count(), 1);
    }

    #[test]
    fn accuracy_handles_no_attempts() {
        assert_eq!(SectionAnalysis::new("empty").accuracy(), 0.0);
    }

    #[test]
    fn analysis_uses_wire_field_names() {
        let mut a = SectionAnalysis::new("Reading");
        a.mark_for_review = 2;
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["sectionName"], "Reading");
        assert_eq!(json["markReviewCount"], 2);
        assert!(json.get("unAttempted").is_some());
        assert!(json.get("totalQues").is_some());
    }
}
