//! # Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an empty file is valid. Command-line flags take precedence over values
//! read from the file.
//!
//! ```yaml
//! format: json
//! trace: true
//! cases:
//!   - input: "851234567V"
//!     expected: old
//!     description: "Valid old format"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use nic_core::Classification;

use crate::suite::SuiteCase;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON (pretty-printed documents, or one object per line in
    /// interactive mode).
    Json,
}

/// An extra regression case as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    /// Input string.
    pub input: String,
    /// Expected outcome: `old`, `new`, or `reject`.
    pub expected: String,
    /// Free-form note shown when the case fails.
    #[serde(default)]
    pub description: String,
}

impl CaseSpec {
    /// Resolve into a suite case, parsing the expected outcome.
    pub fn to_case(&self) -> Result<SuiteCase> {
        let expected: Classification = self
            .expected
            .parse()
            .with_context(|| format!("invalid expected outcome for input {:?}", self.input))?;
        Ok(SuiteCase::new(&self.input, expected, &self.description))
    }
}

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Default for `check --trace`.
    pub trace: bool,
    /// Extra cases appended to the built-in suite.
    pub cases: Vec<CaseSpec>,
}

impl CliConfig {
    /// Parse a config document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("failed to parse config YAML")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in config file {}", path.display()))
    }
}

/// Effective settings after merging the config file and global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Output format.
    pub format: OutputFormat,
    /// Whether `check` prints step traces.
    pub trace: bool,
    /// Extra suite cases from the config file.
    pub extra_cases: Vec<SuiteCase>,
}

impl Settings {
    /// Merge `config` with an optional `--format` override.
    ///
    /// # Errors
    ///
    /// Fails if any configured case has an unrecognized expected outcome.
    pub fn resolve(config: CliConfig, format_flag: Option<OutputFormat>) -> Result<Self> {
        let extra_cases = config
            .cases
            .iter()
            .map(CaseSpec::to_case)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            format: format_flag.or(config.format).unwrap_or_default(),
            trace: config.trace,
            extra_cases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::from_yaml("   \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let yaml = r#"
format: json
trace: true
cases:
  - input: "851234567V"
    expected: old
    description: "Valid old format"
  - input: "85123"
    expected: reject
"#;
        let config = CliConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(config.trace);
        assert_eq!(config.cases.len(), 2);
        assert_eq!(config.cases[1].description, "");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = CliConfig::from_yaml("colour: always\n").unwrap_err();
        assert!(format!("{err:#}").contains("colour"));
    }

    #[test]
    fn flag_overrides_config_format() {
        let config = CliConfig {
            format: Some(OutputFormat::Json),
            ..CliConfig::default()
        };
        let settings = Settings::resolve(config.clone(), Some(OutputFormat::Text)).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);

        let settings = Settings::resolve(config, None).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn default_format_is_text() {
        let settings = Settings::resolve(CliConfig::default(), None).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.trace);
        assert!(settings.extra_cases.is_empty());
    }

    #[test]
    fn cases_are_resolved() {
        let config = CliConfig::from_yaml(
            "cases:\n  - input: \"200012345678\"\n    expected: NEW\n",
        )
        .unwrap();
        let settings = Settings::resolve(config, None).unwrap();
        assert_eq!(settings.extra_cases.len(), 1);
        assert_eq!(
            settings.extra_cases[0].expected,
            Classification::NewFormatAccepted
        );
    }

    #[test]
    fn bad_expected_token_fails_resolution() {
        let config =
            CliConfig::from_yaml("cases:\n  - input: \"1\"\n    expected: maybe\n").unwrap();
        let err = Settings::resolve(config, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid expected outcome"));
        assert!(msg.contains("maybe"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nic.yaml");
        std::fs::write(&path, "trace: true\n").unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert!(config.trace);
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }
}
