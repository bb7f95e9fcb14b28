//! Analysis report envelope with JSON persistence and markdown output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ExamAnalysis;
use crate::statistics::{compute_exam_statistics, ExamStatistics};

/// A complete analysis of one exam-report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Where the document came from (usually a file path).
    pub source: String,
    /// Extracted header and sections.
    pub exam: ExamAnalysis,
    /// Aggregate statistics and scaled scores.
    pub statistics: ExamStatistics,
}

impl AnalysisReport {
    /// Wrap an extracted exam and compute its statistics.
    pub fn new(source: impl Into<String>, exam: ExamAnalysis, full_test: bool) -> Self {
        let statistics = compute_exam_statistics(&exam, full_test);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: source.into(),
            exam,
            statistics,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let info = &self.exam.exam_info;
        let mut md = String::new();

        md.push_str("## Exam analysis\n\n");
        for (label, value) in [
            ("Candidate", &info.candidate_name),
            ("Roll number", &info.roll_number),
            ("Subject", &info.subject),
            ("Venue", &info.venue_name),
            ("Date", &info.exam_date),
            ("Time", &info.exam_time),
        ] {
            if !value.is_empty() {
                md.push_str(&format!("- **{label}:** {value}\n"));
            }
        }

        let totals = &self.statistics.totals;
        md.push_str(&format!(
            "\n**Summary:** {} questions, {} attempted, {} correct, {} incorrect ({:.1}% accuracy)\n\n",
            totals.questions,
            totals.attempted,
            totals.correct,
            totals.incorrect,
            totals.accuracy * 100.0
        ));

        if !self.exam.sections.is_empty() {
            md.push_str("### Sections\n\n");
            md.push_str("| Section | Total | Attempted | Correct | Incorrect | Not answered | Review | Score |\n");
            md.push_str("|---------|-------|-----------|---------|-----------|--------------|--------|-------|\n");
            for (section, stats) in self.exam.sections.iter().zip(&self.statistics.per_section) {
                let a = &section.analysis;
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    section.name,
                    a.total_ques,
                    a.attempted,
                    a.correct,
                    a.incorrect,
                    a.un_attempted,
                    a.mark_for_review,
                    stats.scaled_score
                ));
            }
            md.push('\n');
        }

        if !self.statistics.per_subject.is_empty() {
            md.push_str("### Scaled scores\n\n");
            for s in &self.statistics.per_subject {
                md.push_str(&format!(
                    "- {}: {} ({} of {} correct)\n",
                    s.subject, s.scaled_score, s.correct, s.total_questions
                ));
            }
            if let Some(total) = self.statistics.total_scaled_score {
                md.push_str(&format!("- **Total: {total}**\n"));
            }
        }

        md
    }
}
