//! The `examlens validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examlens_core::document::parse_document;
use examlens_core::extractor::SectionExtractor;
use examlens_core::model::SectionReport;

use crate::config::load_config_from;

pub fn execute(document: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let root = parse_document(&document)?;
    let exam = SectionExtractor::new(config.extractor).extract(&root);

    println!(
        "Document: {} ({} sections, {} questions)",
        document.display(),
        exam.sections.len(),
        exam.question_count()
    );

    let mut warnings = Vec::new();
    if exam.sections.is_empty() {
        warnings.push("no sections found".to_string());
    }
    if exam.exam_info.candidate_name.is_empty() {
        warnings.push("candidate header is missing a name".to_string());
    }
    for section in &exam.sections {
        warnings.extend(section_warnings(section));
    }

    for w in &warnings {
        println!("  WARNING: {w}");
    }

    if warnings.is_empty() {
        println!("Document valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

fn section_warnings(section: &SectionReport) -> Vec<String> {
    let mut warnings = Vec::new();

    if section.name.is_empty() {
        warnings.push("section without a name".to_string());
    }
    if section.questions.is_empty() {
        warnings.push(format!("[{}] section has no questions", section.name));
    }
    for q in section.unrecognized() {
        warnings.push(format!(
            "[{}] question '{}' has unrecognized status '{}'",
            section.name, q.question_id, q.status
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use examlens_core::model::{Question, QuestionStatus};

    fn question(status: QuestionStatus) -> Question {
        Question {
            question_id: "7".into(),
            status,
            answer: "--".into(),
            is_correct: false,
        }
    }

    #[test]
    fn clean_section_has_no_warnings() {
        let mut section = SectionReport::new("Math");
        section.push(question(QuestionStatus::NotAnswered));
        assert!(section_warnings(&section).is_empty());
    }

    #[test]
    fn unrecognized_status_is_reported() {
        let mut section = SectionReport::new("Math");
        section.push(question(QuestionStatus::parse("Skipped")));
        let warnings = section_warnings(&section);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unrecognized status 'Skipped'"));
    }

    #[test]
    fn empty_section_is_reported() {
        let warnings = section_warnings(&SectionReport::new(""));
        assert_eq!(warnings.len(), 2);
    }
}
