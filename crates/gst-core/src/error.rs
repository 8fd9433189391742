//! # Error Types
//!
//! Domain-specific error types for gst-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gst-core errors (this file)                                           │
//! │  ├── ValidationError  - Argument rejected before any math runs         │
//! │  │   ├── InvalidType  - not a number (NaN, ±∞)                         │
//! │  │   └── OutOfRange   - negative price, rate outside [0, 100]          │
//! │  └── UnknownCategory  - rate category name not in the slab table       │
//! │                                                                         │
//! │  gst-cli errors (separate crate)                                       │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → stderr / JSON                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every error names the offending argument and the value it carried
//! 3. Errors are enum variants, never String

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::{MAX_GST_RATE, MIN_GST_RATE};

// =============================================================================
// Argument
// =============================================================================

/// Identifies which calculator argument failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Argument {
    /// Price before GST (forward calculation input).
    BasePrice,
    /// Price including GST (reverse calculation input).
    TotalPrice,
    /// GST rate as a percentage.
    GstRate,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Argument::BasePrice => "base price",
            Argument::TotalPrice => "total price",
            Argument::GstRate => "GST rate",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Constraint
// =============================================================================

/// The bound an out-of-range argument violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Prices must be `>= 0`.
    NonNegative,
    /// Rates must lie in `[MIN_GST_RATE, MAX_GST_RATE]`.
    Percentage,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NonNegative => f.write_str("must be a non-negative number"),
            Constraint::Percentage => {
                write!(f, "must be between {} and {}", MIN_GST_RATE, MAX_GST_RATE)
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
///
/// Raised synchronously by the calculator before any arithmetic runs.
/// There is never a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The argument is not a number.
    ///
    /// ## When This Occurs
    /// - `f64` input is NaN or infinite
    /// - A boundary layer could not parse raw text as a number
    #[error("{argument} must be a number, got {value}")]
    InvalidType { argument: Argument, value: String },

    /// The argument is a number but violates its declared bound.
    ///
    /// ## When This Occurs
    /// - Base or total price is negative
    /// - GST rate is below 0 or above 100
    #[error("{argument} {constraint}, got {value}")]
    OutOfRange {
        argument: Argument,
        value: f64,
        constraint: Constraint,
    },
}

impl ValidationError {
    /// Returns the argument that failed validation.
    pub fn argument(&self) -> Argument {
        match self {
            ValidationError::InvalidType { argument, .. }
            | ValidationError::OutOfRange { argument, .. } => *argument,
        }
    }
}

// =============================================================================
// Unknown Category
// =============================================================================

/// A rate category name that is not one of the published slabs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rate category '{0}', expected one of: exempted, essential, standard, luxury")]
pub struct UnknownCategory(pub String);

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_messages() {
        let err = ValidationError::OutOfRange {
            argument: Argument::BasePrice,
            value: -100.0,
            constraint: Constraint::NonNegative,
        };
        assert_eq!(
            err.to_string(),
            "base price must be a non-negative number, got -100"
        );

        let err = ValidationError::OutOfRange {
            argument: Argument::GstRate,
            value: 150.0,
            constraint: Constraint::Percentage,
        };
        assert_eq!(
            err.to_string(),
            "GST rate must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn test_invalid_type_message() {
        let err = ValidationError::InvalidType {
            argument: Argument::TotalPrice,
            value: f64::NAN.to_string(),
        };
        assert_eq!(err.to_string(), "total price must be a number, got NaN");
    }

    #[test]
    fn test_argument_accessor() {
        let err = ValidationError::InvalidType {
            argument: Argument::GstRate,
            value: "inf".to_string(),
        };
        assert_eq!(err.argument(), Argument::GstRate);
    }
}
