//! # Configuration
//!
//! CLI configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`)
//! 2. Environment variables (`GST_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `GST_DEFAULT_RATE`: rate used when a command omits one, as a number
//!   or a category name. Default: `18` (standard)
//! - `GST_OUTPUT`: `text` or `json`. Default: `text`

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use gst_core::validation::validate_gst_rate;
use gst_core::RateCategory;

use crate::input::parse_rate;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines for people
    #[default]
    Text,

    /// Pretty-printed JSON records for scripts
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("GST_OUTPUT".to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Application configuration.
///
/// Read-only after startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Rate (percent) used when a command does not give one
    pub default_rate: f64,

    /// How results are printed
    pub output: OutputFormat,
}

impl Default for ConfigState {
    /// Standard-rate GST, text output.
    fn default() -> Self {
        ConfigState {
            default_rate: RateCategory::Standard.rate(),
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key/value source.
    ///
    /// Unset keys keep their defaults; set but invalid keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("GST_DEFAULT_RATE") {
            let rate = parse_rate(&raw)
                .map_err(|_| ConfigError::InvalidValue("GST_DEFAULT_RATE".to_string()))?;
            validate_gst_rate(rate)
                .map_err(|_| ConfigError::InvalidValue("GST_DEFAULT_RATE".to_string()))?;
            config.default_rate = rate;
        }

        if let Some(raw) = lookup("GST_OUTPUT") {
            config.output = raw.parse()?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
