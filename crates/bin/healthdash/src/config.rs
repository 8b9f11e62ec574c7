//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `healthdash.toml` in the working directory (or the path in
//! `HEALTHDASH_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use healthdash_adapter_html_askama::PageOptions;
use healthdash_adapter_html_askama::back_to_top::{BackToTop, Placement};
use healthdash_domain::caption::{CaptionSet, Captions};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset input settings.
    pub input: InputConfig,
    /// Where and how the result is written.
    pub output: OutputConfig,
    /// Page chrome.
    pub page: PageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Panel titles.
    pub titles: CaptionSet,
    /// Panel descriptions.
    pub descriptions: CaptionSet,
}

/// Dataset input configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the dataset JSON file.
    pub dataset: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML page.
    #[default]
    Html,
    /// The composed view models as JSON.
    Json,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File to write; stdout when unset.
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Page chrome configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Stylesheet URL linked from the page head.
    pub stylesheet: Option<String>,
    /// Placement of the back-to-top link (`inline` or `overlay`).
    pub back_to_top: Placement,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `healthdash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("HEALTHDASH_CONFIG").unwrap_or_else(|_| "healthdash.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HEALTHDASH_DATASET") {
            self.input.dataset = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("HEALTHDASH_OUTPUT") {
            self.output.path = if val.is_empty() || val == "-" {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
        if let Ok(val) = std::env::var("HEALTHDASH_TITLE") {
            self.page.title = val;
        }
        if let Ok(val) = std::env::var("HEALTHDASH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.input.dataset.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "dataset path must not be empty".to_string(),
            ));
        }
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Captions handed to the dashboard service.
    #[must_use]
    pub fn captions(&self) -> Captions {
        Captions {
            titles: self.titles.clone(),
            descriptions: self.descriptions.clone(),
        }
    }

    /// Page options handed to the HTML renderer.
    #[must_use]
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.page.title.clone(),
            stylesheet: self.page.stylesheet.clone(),
            back_to_top: BackToTop::default().with_placement(self.page.back_to_top),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data.json"),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: PageOptions::default().title,
            stylesheet: None,
            back_to_top: Placement::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "healthdash=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
