//! # Validation Module
//!
//! Argument validation for the GST calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Boundary (gst-cli)                                           │
//! │  ├── Is the raw text a parseable number?                               │
//! │  └── Unparseable input → user-facing notice, core never called         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core (THIS MODULE)                                           │
//! │  ├── Finite?            → else InvalidType                             │
//! │  └── Within bounds?     → else OutOfRange                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Calculator arithmetic (only ever sees valid input)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::error::Argument;
//! use gst_core::validation::{validate_gst_rate, validate_price};
//!
//! assert!(validate_price(Argument::BasePrice, 1000.0).is_ok());
//! assert!(validate_gst_rate(18.0).is_ok());
//! assert!(validate_gst_rate(150.0).is_err());
//! ```

use crate::error::{Argument, Constraint, ValidationError};
use crate::{MAX_GST_RATE, MIN_GST_RATE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejects NaN and infinities.
fn ensure_finite(argument: Argument, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidType {
            argument,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates a price (base or total).
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (>= 0)
/// - Zero is allowed
///
/// ## Example
/// ```rust
/// use gst_core::error::Argument;
/// use gst_core::validation::validate_price;
///
/// assert!(validate_price(Argument::TotalPrice, 0.0).is_ok());
/// assert!(validate_price(Argument::TotalPrice, -1.0).is_err());
/// assert!(validate_price(Argument::TotalPrice, f64::NAN).is_err());
/// ```
pub fn validate_price(argument: Argument, value: f64) -> ValidationResult<()> {
    ensure_finite(argument, value)?;

    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            argument,
            value,
            constraint: Constraint::NonNegative,
        });
    }

    Ok(())
}

/// Validates a GST rate given as a percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100 inclusive
///
/// Any rate in that range is accepted, not just the published categories.
pub fn validate_gst_rate(rate: f64) -> ValidationResult<()> {
    ensure_finite(Argument::GstRate, rate)?;

    if !(MIN_GST_RATE..=MAX_GST_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            argument: Argument::GstRate,
            value: rate,
            constraint: Constraint::Percentage,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0)]
    #[case::whole(1000.0)]
    #[case::fractional(1234.56)]
    #[case::huge(1e300)]
    fn accepts_non_negative_prices(#[case] price: f64) {
        assert!(validate_price(Argument::BasePrice, price).is_ok());
    }

    #[test]
    fn test_negative_price_is_out_of_range() {
        let err = validate_price(Argument::BasePrice, -100.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                argument: Argument::BasePrice,
                value: -100.0,
                constraint: Constraint::NonNegative,
            }
        );
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::pos_inf(f64::INFINITY)]
    #[case::neg_inf(f64::NEG_INFINITY)]
    fn non_finite_price_is_invalid_type(#[case] price: f64) {
        let err = validate_price(Argument::TotalPrice, price).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidType {
                argument: Argument::TotalPrice,
                ..
            }
        ));
    }

    #[rstest]
    #[case::lower_bound(0.0)]
    #[case::essential(5.0)]
    #[case::fractional(12.5)]
    #[case::upper_bound(100.0)]
    fn accepts_rates_in_range(#[case] rate: f64) {
        assert!(validate_gst_rate(rate).is_ok());
    }

    #[rstest]
    #[case::negative(-5.0)]
    #[case::just_below(-0.0001)]
    #[case::just_above(100.0001)]
    #[case::far_above(150.0)]
    fn rejects_rates_out_of_range(#[case] rate: f64) {
        let err = validate_gst_rate(rate).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                argument: Argument::GstRate,
                constraint: Constraint::Percentage,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_rate_is_invalid_type() {
        let err = validate_gst_rate(f64::NAN).unwrap_err();
        assert_eq!(err.argument(), Argument::GstRate);
        assert!(matches!(err, ValidationError::InvalidType { .. }));
    }
}
