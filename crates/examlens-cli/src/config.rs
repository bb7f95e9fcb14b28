//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use examlens_core::config::ExtractorConfig;

/// Top-level examlens configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamlensConfig {
    /// Prorate partial attempts to the full-test question count by default.
    #[serde(default)]
    pub full_test: bool,
    /// Output directory for saved reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default output format(s) for `analyze`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Markup conventions for extraction.
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./examlens-results")
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for ExamlensConfig {
    fn default() -> Self {
        Self {
            full_test: false,
            output_dir: default_output_dir(),
            format: default_format(),
            extractor: ExtractorConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `examlens.toml` in the current directory
/// 2. `~/.config/examlens/config.toml`
///
/// Environment variable overrides: `EXAMLENS_FULL_TEST`, `EXAMLENS_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamlensConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examlens.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ExamlensConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExamlensConfig::default(),
    };

    if let Ok(value) = std::env::var("EXAMLENS_FULL_TEST") {
        config.full_test = matches!(value.trim(), "1" | "true" | "yes");
    }
    if let Ok(dir) = std::env::var("EXAMLENS_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    config.output_dir = PathBuf::from(resolve_env_vars(&config.output_dir.to_string_lossy()));

    if let Some(path) = &config_path {
        tracing::debug!("loaded config from {}", path.display());
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examlens"))
}
