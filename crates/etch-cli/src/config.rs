//! CLI configuration file
//!
//! Optional TOML file passed with `--config`. Every field has a default,
//! and command-line flags override whatever the file sets.
//!
//! ```toml
//! [matcher]
//! max_score = 280
//! tie_break = "name"
//!
//! [output]
//! format = "json"
//! limit = 5
//! ```

use anyhow::{bail, Context, Result};
use etch_matcher::MatcherConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// `[output]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format
    pub format: OutputFormat,
    /// Maximum number of ranked results to print
    pub limit: Option<usize>,
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Matcher policy
    pub matcher: MatcherConfig,
    /// Output policy
    pub output: OutputConfig,
}

impl CliConfig {
    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        config.matcher.validate()?;
        if config.output.limit == Some(0) {
            bail!("output.limit must be at least 1");
        }
        Ok(config)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("loading config {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etch_matcher::TieBreak;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let text = "[matcher]\nmax_score = 300\ntie_break = \"name\"\n\
                    [output]\nformat = \"json\"\nlimit = 3\n";
        let config = CliConfig::from_toml(text).unwrap();
        assert_eq!(config.matcher.max_score, 300);
        assert_eq!(config.matcher.tie_break, TieBreak::Name);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.limit, Some(3));
    }

    #[test]
    fn rejects_zero_max_score() {
        let err = CliConfig::from_toml("[matcher]\nmax_score = 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("max_score"));
    }

    #[test]
    fn rejects_zero_limit() {
        let err = CliConfig::from_toml("[output]\nlimit = 0\n").unwrap_err();
        assert!(err.to_string().contains("output.limit"));
    }

    #[test]
    fn rejects_unknown_tie_break() {
        assert!(CliConfig::from_toml("[matcher]\ntie_break = \"random\"\n").is_err());
    }
}
