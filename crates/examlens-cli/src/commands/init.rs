//! The `examlens init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("examlens.toml").exists() {
        println!("examlens.toml already exists, skipping.");
    } else {
        std::fs::write("examlens.toml", SAMPLE_CONFIG)?;
        println!("Created examlens.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the [extractor] classes if your reports use different markup");
    println!("  2. Run: examlens validate --document report.json");
    println!("  3. Run: examlens analyze --document report.json --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examlens configuration

# Prorate partial attempts to the full-test question count.
full_test = false
output_dir = "./examlens-results"
# json, html, markdown, or all
format = "json"

[extractor]
section_class = "section-cntnr"
section_label_class = "section-lbl"
section_name_class = "bold"
question_class = "question-pnl"
detail_table_class = "menu-tbl"
right_answer_class = "rightAns"
info_panel_class = "main-info-pnl"
status_label = "Status :"
chosen_option_label = "Chosen Option :"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExamlensConfig;

    #[test]
    fn sample_config_parses_to_defaults() {
        let parsed: ExamlensConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, ExamlensConfig::default());
    }
}
