//! Extractor configuration.
//!
//! Class names and row labels the extractor looks for. The defaults match
//! the standard exam-report markup; a different report layout only needs a
//! different `[extractor]` table in `examlens.toml`.

use serde::{Deserialize, Serialize};

/// Markup conventions used to locate sections, questions, and header fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Container of one section.
    pub section_class: String,
    /// Label element of a section.
    pub section_label_class: String,
    /// Element inside the label holding the section name.
    pub section_name_class: String,
    /// Container of one question.
    pub question_class: String,
    /// Table with the question's id, status, and chosen option rows.
    pub detail_table_class: String,
    /// Element carrying the right-answer annotation.
    pub right_answer_class: String,
    /// Panel holding the candidate header tables.
    pub info_panel_class: String,
    pub status_label: String,
    pub chosen_option_label: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            section_class: "section-cntnr".into(),
            section_label_class: "section-lbl".into(),
            section_name_class: "bold".into(),
            question_class: "question-pnl".into(),
            detail_table_class: "menu-tbl".into(),
            right_answer_class: "rightAns".into(),
            info_panel_class: "main-info-pnl".into(),
            status_label: "Status :".into(),
            chosen_option_label: "Chosen Option :".into(),
        }
    }
}
