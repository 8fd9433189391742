//! # Output Rendering
//!
//! Turns command results into the text printed on stdout.
//!
//! Text mode writes only the formatted rupee strings, one labelled line
//! each. JSON mode writes the full record, raw numbers included.

use serde::Serialize;

use gst_core::{ForwardResult, GstRates, ReverseResult};

use crate::config::{ConfigState, OutputFormat};
use crate::error::ApiError;

/// A successful command result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Forward(ForwardResult),
    Reverse(ReverseResult),
    Rates(GstRates),
    Config(ConfigState),
}

impl Response {
    /// Renders the response in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ApiError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Response::Forward(result) => format!(
                "GST Amount:  {}\nTotal Price: {}",
                result.formatted.gst_amount, result.formatted.total_price
            ),
            Response::Reverse(result) => format!(
                "Base Price:  {}\nGST Amount:  {}",
                result.formatted.base_price, result.formatted.gst_amount
            ),
            Response::Rates(rates) => rates
                .iter()
                .map(|(category, rate)| format!("{:<10}{:>4}%", category.name(), rate))
                .collect::<Vec<_>>()
                .join("\n"),
            Response::Config(config) => format!(
                "Default rate: {}%\nOutput:       {}",
                config.default_rate, config.output
            ),
        }
    }
}

/// Renders an error for stderr.
///
/// Text mode prints the bare message, which is the notice the user should
/// see. JSON mode prints the whole `ApiError`.
pub fn render_error(err: &ApiError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.message.clone(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(err).unwrap_or_else(|_| err.message.clone())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
