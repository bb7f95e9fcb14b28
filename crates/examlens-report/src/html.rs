//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use examlens_core::model::{Question, SectionReport};
use examlens_core::report::AnalysisReport;
use examlens_core::statistics::SubjectScore;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report from an analysis report.
pub fn generate_html(report: &AnalysisReport) -> String {
    let info = &report.exam.exam_info;
    let stats = &report.statistics;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>examlens report: {}</title>\n",
        html_escape(&info.candidate_name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>examlens report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Candidate: <strong>{}</strong> | Roll number {} | {} | {} {} | {}</p>\n",
        html_escape(&info.candidate_name),
        html_escape(&info.roll_number),
        html_escape(&info.subject),
        html_escape(&info.exam_date),
        html_escape(&info.exam_time),
        html_escape(&info.venue_name),
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Generated {}</p>\n",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Section</th><th>Total</th><th>Attempted</th><th>Correct</th><th>Incorrect</th><th>Not answered</th><th>Review</th><th>Accuracy</th><th>Score</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for (section, section_stats) in report.exam.sections.iter().zip(&stats.per_section) {
        let a = &section.analysis;
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td><td>{}</td></tr>\n",
            html_escape(&section.name),
            a.total_ques,
            a.attempted,
            a.correct,
            a.incorrect,
            a.un_attempted,
            a.mark_for_review,
            section_stats.accuracy * 100.0,
            section_stats.scaled_score,
        ));
    }
    html.push_str("</tbody></table>\n");

    if !stats.per_subject.is_empty() {
        html.push_str(&generate_bar_chart(&stats.per_subject));
        if let Some(total) = stats.total_scaled_score {
            html.push_str(&format!("<p class=\"total\">Total scaled score: <strong>{total}</strong></p>\n"));
        }
    }

    html.push_str("</section>\n");

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Questions</h2>\n");
    for (i, section) in report.exam.sections.iter().enumerate() {
        html.push_str(&section_table(i, section));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

fn section_table(index: usize, section: &SectionReport) -> String {
    let table_id = format!("section-{index}");
    let mut html = format!("<h3>{}</h3>\n", html_escape(&section.name));
    html.push_str(&format!("<table class=\"results-table\" id=\"{table_id}\">\n"));
    html.push_str(&format!(
        "<thead><tr><th onclick=\"sortTable('{table_id}', 0)\">Question</th><th onclick=\"sortTable('{table_id}', 1)\">Status</th><th onclick=\"sortTable('{table_id}', 2)\">Answer</th><th onclick=\"sortTable('{table_id}', 3)\">Result</th></tr></thead>\n"
    ));
    html.push_str("<tbody>\n");
    for q in &section.questions {
        let (class, result) = question_result(q);
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            html_escape(&q.question_id),
            html_escape(q.status.as_str()),
            html_escape(&q.answer),
            result
        ));
    }
    html.push_str("</tbody></table>\n");
    html
}

fn question_result(q: &Question) -> (&'static str, &'static str) {
    if !q.status.is_attempted() {
        ("skip", "-")
    } else if q.is_correct {
        ("pass", "Correct")
    } else {
        ("fail", "Incorrect")
    }
}

fn generate_bar_chart(per_subject: &[SubjectScore]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 120;
    let max_score = 800.0;

    let total_height = per_subject.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, subject) in per_subject.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let fraction = (subject.scaled_score as f64 / max_score).clamp(0.0, 1.0);
        let width = (fraction * max_width as f64) as usize;

        let color = if subject.scaled_score >= 600 {
            "#22c55e"
        } else if subject.scaled_score >= 400 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            subject.subject
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            subject.scaled_score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; --skip: #f3f4f6; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --skip: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.total { font-size: 1.25rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.skip { background: var(--skip); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(id, col) {
  const table = document.getElementById(id);
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb, undefined, {numeric: true}) : vb.localeCompare(va, undefined, {numeric: true});
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
