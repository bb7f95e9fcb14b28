//! Section and question extraction.
//!
//! Walks an exam-report tree in document order, classifies every question,
//! and builds one [`SectionReport`] per section container together with the
//! candidate header. Extraction is permissive: a missing field reads as an
//! empty string and a document with no sections yields no reports.

use crate::config::ExtractorConfig;
use crate::evaluator::is_correct;
use crate::model::{ExamAnalysis, Question, QuestionStatus, SectionReport, StudentExamInfo};
use crate::query::{select, select_text, Step};
use crate::traits::DocumentNode;

/// Extracts exam analytics from a parsed report document.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    config: ExtractorConfig,
}

impl SectionExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the header and every section of a document.
    pub fn extract<N: DocumentNode>(&self, document: &N) -> ExamAnalysis {
        ExamAnalysis {
            exam_info: self.exam_info(document),
            sections: self.sections(document),
        }
    }

    /// Read the candidate header from the two-cell rows of the info panel.
    pub fn exam_info<N: DocumentNode>(&self, document: &N) -> StudentExamInfo {
        let mut info = StudentExamInfo::default();
        let rows = select(
            document,
            &[
                Step::class(&self.config.info_panel_class),
                Step::tag("table"),
                Step::tag("tr"),
            ],
        );

        for row in rows {
            let cells = select(row, &[Step::tag("td")]);
            let [key, value] = cells.as_slice() else {
                continue;
            };
            let value = value.text();
            match key.text().as_str() {
                "Roll Number" => info.roll_number = value,
                "Candidate Name" => info.candidate_name = value,
                "Venue Name" | "Test Center Name" => info.venue_name = value,
                "Exam Date" | "Test Date" => info.exam_date = value,
                "Exam Time" | "Test Time" => info.exam_time = value,
                "Subject" => info.subject = value,
                _ => {}
            }
        }

        info
    }

    /// Build one report per section container, in document order.
    pub fn sections<N: DocumentNode>(&self, document: &N) -> Vec<SectionReport> {
        let containers = select(document, &[Step::class(&self.config.section_class)]);
        if containers.is_empty() {
            tracing::debug!("no '{}' containers found", self.config.section_class);
        }

        containers
            .into_iter()
            .map(|container| self.section(container))
            .collect()
    }

    fn section<N: DocumentNode>(&self, container: &N) -> SectionReport {
        let name = select_text(
            container,
            &[
                Step::class(&self.config.section_label_class),
                Step::class(&self.config.section_name_class),
            ],
        );
        let mut report = SectionReport::new(name);

        for node in select(container, &[Step::class(&self.config.question_class)]) {
            let question = self.question(node);
            if let QuestionStatus::Unrecognized(raw) = &question.status {
                tracing::warn!(
                    "section '{}': question '{}' has unrecognized status '{}'",
                    report.name,
                    question.question_id,
                    raw
                );
            }
            report.push(question);
        }

        let a = &report.analysis;
        tracing::debug!(
            "section '{}': {} questions, {} attempted, {} correct",
            report.name,
            a.total_ques,
            a.attempted,
            a.correct
        );
        report
    }

    fn question<N: DocumentNode>(&self, node: &N) -> Question {
        let table = Step::class(&self.config.detail_table_class);
        let value_cell = Step::tag("td").nth_child(2);

        let question_id = select_text(node, &[table, Step::tag("tr").nth_child(1), value_cell]);
        let status = select_text(
            node,
            &[table, Step::tag("tr").containing(&self.config.status_label), value_cell],
        );
        let answer = select_text(
            node,
            &[
                table,
                Step::tag("tr").containing(&self.config.chosen_option_label),
                value_cell,
            ],
        );
        let annotation = select_text(node, &[Step::class(&self.config.right_answer_class)]);

        Question {
            question_id,
            status: QuestionStatus::parse(&status),
            is_correct: is_correct(&annotation, &answer),
            answer,
        }
    }
}

/// Extract with the default markup conventions.
pub fn extract_exam<N: DocumentNode>(document: &N) -> ExamAnalysis {
    SectionExtractor::default().extract(document)
}
