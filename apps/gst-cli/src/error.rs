//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  gst forward abc 18                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unparseable field? ── notice (INVALID_INPUT) ──────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Core rejected? ── ValidationError ──────────── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr (text):  Please enter a valid base price (non-negative number) │
//! │  stdout (json):  { "code": "INVALID_INPUT", "message": "..." }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{debug, error};

use gst_core::{Argument, UnknownCategory, ValidationError};

use crate::config::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// This is what `--json` prints when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "GST rate must be between 0 and 100, got 150",
///   "argument": "gstRate"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// The calculator argument at fault, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<Argument>,
}

/// Error codes for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field could not be read as a non-negative number (user notice)
    InvalidInput,

    /// The calculator rejected an argument
    ValidationError,

    /// Rate given by name, but no such category
    UnknownCategory,

    /// Environment configuration is invalid
    ConfigError,

    /// Output could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            argument: None,
        }
    }

    /// Creates the user-facing notice for a field that is not a usable number.
    ///
    /// No calculation is attempted when this is returned.
    pub fn notice(argument: Argument) -> Self {
        let message = match argument {
            Argument::BasePrice => "Please enter a valid base price (non-negative number)",
            Argument::TotalPrice => "Please enter a valid total price (non-negative number)",
            Argument::GstRate => "Please enter a valid GST rate (0 to 100, or a category name)",
        };
        ApiError {
            code: ErrorCode::InvalidInput,
            message: message.to_string(),
            argument: Some(argument),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        debug!(argument = %err.argument(), "calculator rejected input: {}", err);
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            argument: Some(err.argument()),
        }
    }
}

impl From<UnknownCategory> for ApiError {
    fn from(err: UnknownCategory) -> Self {
        ApiError {
            code: ErrorCode::UnknownCategory,
            message: err.to_string(),
            argument: Some(Argument::GstRate),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        // Log the actual error but return a generic message
        error!("JSON serialization failed: {}", err);
        ApiError::internal("Failed to render output")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
