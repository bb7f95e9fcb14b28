//! The `examlens analyze` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use examlens_core::document::parse_document;
use examlens_core::extractor::SectionExtractor;
use examlens_core::report::AnalysisReport;
use examlens_report::html::write_html_report;

use crate::config::load_config_from;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Html,
    Markdown,
}

/// Parse `all` or a comma-separated list of formats.
fn parse_formats(spec: &str) -> Result<Vec<OutputFormat>> {
    if spec.trim() == "all" {
        return Ok(vec![OutputFormat::Json, OutputFormat::Html, OutputFormat::Markdown]);
    }
    spec.split(',')
        .map(|s| match s.trim() {
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("unknown format '{other}' (expected json, html, markdown or all)"),
        })
        .collect()
}

pub fn execute(
    document: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    full_test: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let full_test = full_test || config.full_test;
    let output = output.unwrap_or(config.output_dir);
    let format = format.unwrap_or(config.format);

    let formats = parse_formats(&format)?;

    let root = parse_document(&document)?;
    let extractor = SectionExtractor::new(config.extractor);
    let exam = extractor.extract(&root);
    tracing::info!(
        "extracted {} sections, {} questions from {}",
        exam.sections.len(),
        exam.question_count(),
        document.display()
    );

    let report = AnalysisReport::new(document.display().to_string(), exam, full_test);
    print_summary(&report);

    std::fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match fmt {
            OutputFormat::Json => {
                let path = output.join(format!("analysis-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            OutputFormat::Html => {
                let path = output.join(format!("analysis-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            OutputFormat::Markdown => {
                let path = output.join(format!("analysis-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Markdown report: {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    use comfy_table::{Cell, Table};

    let info = &report.exam.exam_info;
    if !info.candidate_name.is_empty() {
        println!("Candidate: {} ({})", info.candidate_name, info.roll_number);
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Section",
        "Total",
        "Attempted",
        "Correct",
        "Incorrect",
        "Not answered",
        "Review",
        "Accuracy",
        "Score",
    ]);

    for (section, stats) in report
        .exam
        .sections
        .iter()
        .zip(&report.statistics.per_section)
    {
        let a = &section.analysis;
        table.add_row(vec![
            Cell::new(&section.name),
            Cell::new(a.total_ques),
            Cell::new(a.attempted),
            Cell::new(a.correct),
            Cell::new(a.incorrect),
            Cell::new(a.un_attempted),
            Cell::new(a.mark_for_review),
            Cell::new(format!("{:.1}%", stats.accuracy * 100.0)),
            Cell::new(stats.scaled_score),
        ]);
    }
    println!("{table}");

    for subject in &report.statistics.per_subject {
        println!(
            "{}: {} ({} of {} correct)",
            subject.subject, subject.scaled_score, subject.correct, subject.total_questions
        );
    }
    if let Some(total) = report.statistics.total_scaled_score {
        println!("Total scaled score: {total}");
    }

    let unrecognized = report.statistics.totals.unrecognized;
    if unrecognized > 0 {
        eprintln!("Warning: {unrecognized} question(s) with unrecognized status");
    }
}
