use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{CliError, CliResult};

pub const DEFAULT_CONFIG_PATH: &str = "fairsplit.toml";

/// How split results are written to stdout.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The short export text
    #[default]
    Text,
    /// Per-participant table
    Table,
    /// The full allocation as JSON
    Json,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_placeholder_label")]
    pub placeholder_label: String,
    #[serde(default = "default_true")]
    pub include_date: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder_label: default_placeholder_label(),
            include_date: true,
            format: OutputFormat::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FairsplitConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl FairsplitConfig {
    /// Loads configuration from `path`, else `FAIRSPLIT_CONFIG_PATH`, else
    /// `fairsplit.toml`, then applies environment overrides.
    ///
    /// A missing default file falls back to built-in defaults; a missing file
    /// that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("FAIRSPLIT_CONFIG_PATH").map(PathBuf::from));
        let config_path = explicit.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = match fs::read_to_string(&config_path) {
            Ok(text) => {
                let mut config = Self::from_toml_str(&text)?;
                config.source = Some(config_path);
                config
            }
            Err(e) if e.kind() == ErrorKind::NotFound && explicit.is_none() => Self::default(),
            Err(e) => return Err(CliError::Io(e)),
        };

        Ok(config.apply_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_toml_str(text: &str) -> CliResult<Self> {
        toml::from_str(text).map_err(|e| CliError::Config { message: e.to_string() })
    }

    /// Applies `FAIRSPLIT_*` overrides looked up through `lookup`.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(title) = lookup("FAIRSPLIT_TITLE") {
            self.display.title = title;
        }
        if let Some(placeholder) = lookup("FAIRSPLIT_PLACEHOLDER") {
            self.display.placeholder_label = placeholder;
        }
        if let Some(json) = lookup("FAIRSPLIT_LOG_JSON") {
            if let Ok(json) = json.parse::<bool>() {
                self.logging.json = json;
            }
        }
        self
    }

    /// Reports where the configuration came from. Call once logging is up.
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!(path = %path.display(), "Loaded configuration"),
            None => info!("No configuration file found, using defaults"),
        }
    }
}

fn default_title() -> String {
    "Bill split".to_string()
}

fn default_placeholder_label() -> String {
    "Friend".to_string()
}

fn default_log_filter() -> String {
    "fairsplit_cli=warn,fairsplit_calculator=warn".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_uses_defaults() {
        let config = FairsplitConfig::from_toml_str("").unwrap();
        assert_eq!(config, FairsplitConfig::default());
        assert!(config.display.include_date);
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = FairsplitConfig::from_toml_str(
            r#"
[display]
title = "Lunch order"
format = "table"

[logging]
json = true
"#,
        )
        .unwrap();
        assert_eq!(config.display.title, "Lunch order");
        assert_eq!(config.display.placeholder_label, "Friend");
        assert_eq!(config.display.format, OutputFormat::Table);
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, default_log_filter());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = FairsplitConfig::from_toml_str("[display\ntitle = 1").unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn environment_overrides_apply() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("FAIRSPLIT_TITLE", "Dinner"),
            ("FAIRSPLIT_PLACEHOLDER", "Guest"),
            ("FAIRSPLIT_LOG_JSON", "true"),
        ]);
        let config = FairsplitConfig::default().apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.display.title, "Dinner");
        assert_eq!(config.display.placeholder_label, "Guest");
        assert!(config.logging.json);
    }

    #[test]
    fn unparsable_override_is_ignored() {
        let config = FairsplitConfig::default()
            .apply_overrides(|k| (k == "FAIRSPLIT_LOG_JSON").then(|| "maybe".to_string()));
        assert!(!config.logging.json);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("fairsplit-does-not-exist.toml");
        let err = FairsplitConfig::load(Some(&missing)).unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
