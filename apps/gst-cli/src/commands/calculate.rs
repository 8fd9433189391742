//! # Calculate Commands
//!
//! Forward and reverse GST from the command line.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gst forward "₹1,000" standard                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  parse_amount("₹1,000")   ── not a number? ──► notice, stop             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  resolve_rate("standard") ── unknown name? ──► UNKNOWN_CATEGORY         │
//! │         │                  (omitted → GST_DEFAULT_RATE)                 │
//! │         ▼                                                               │
//! │  calculator.calculate_forward(1000.0, 18.0)                             │
//! │         │                  ── out of range? ──► VALIDATION_ERROR        │
//! │         ▼                                                               │
//! │  ForwardResult ──► output.rs                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Args;
use tracing::{debug, info};

use gst_core::{Argument, ForwardResult, GstCalculator, ReverseResult};

use crate::config::ConfigState;
use crate::error::ApiError;
use crate::input::{parse_amount, parse_rate};

/// Arguments for `gst forward`.
#[derive(Debug, Clone, Args)]
pub struct ForwardArgs {
    /// Price before GST (e.g. 1000, 1234.56, ₹1,18,000)
    #[arg(allow_hyphen_values = true)]
    pub base_price: String,

    /// GST rate in percent, or exempted | essential | standard | luxury
    /// [default: GST_DEFAULT_RATE or 18]
    #[arg(allow_hyphen_values = true)]
    pub rate: Option<String>,
}

/// Arguments for `gst reverse`.
#[derive(Debug, Clone, Args)]
pub struct ReverseArgs {
    /// Price including GST (e.g. 1180, ₹1,18,000)
    #[arg(allow_hyphen_values = true)]
    pub total_price: String,

    /// GST rate in percent, or exempted | essential | standard | luxury
    /// [default: GST_DEFAULT_RATE or 18]
    #[arg(allow_hyphen_values = true)]
    pub rate: Option<String>,
}

/// Uses the given rate, or the configured default when none was given.
fn resolve_rate(raw: Option<&str>, config: &ConfigState) -> Result<f64, ApiError> {
    match raw {
        Some(raw) => Ok(parse_rate(raw)?),
        None => Ok(config.default_rate),
    }
}

/// Adds GST to a base price.
///
/// ## Returns
/// The full forward record; raw numbers unrounded, strings in rupees.
pub fn forward(
    calculator: &GstCalculator,
    config: &ConfigState,
    args: &ForwardArgs,
) -> Result<ForwardResult, ApiError> {
    debug!(base_price = %args.base_price, rate = ?args.rate, "forward command");

    let base_price = parse_amount(&args.base_price, Argument::BasePrice)?;
    let rate = resolve_rate(args.rate.as_deref(), config)?;

    let result = calculator.calculate_forward(base_price, rate)?;
    info!(
        base_price,
        rate,
        gst_amount = result.gst_amount,
        total_price = result.total_price,
        "forward GST calculated"
    );

    Ok(result)
}

/// Extracts GST from a tax-inclusive total.
pub fn reverse(
    calculator: &GstCalculator,
    config: &ConfigState,
    args: &ReverseArgs,
) -> Result<ReverseResult, ApiError> {
    debug!(total_price = %args.total_price, rate = ?args.rate, "reverse command");

    let total_price = parse_amount(&args.total_price, Argument::TotalPrice)?;
    let rate = resolve_rate(args.rate.as_deref(), config)?;

    let result = calculator.calculate_reverse(total_price, rate)?;
    info!(
        total_price,
        rate,
        base_price = result.base_price,
        gst_amount = result.gst_amount,
        "reverse GST calculated"
    );

    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn forward_args(base_price: &str, rate: Option<&str>) -> ForwardArgs {
        ForwardArgs {
            base_price: base_price.to_string(),
            rate: rate.map(str::to_string),
        }
    }

    fn reverse_args(total_price: &str, rate: Option<&str>) -> ReverseArgs {
        ReverseArgs {
            total_price: total_price.to_string(),
            rate: rate.map(str::to_string),
        }
    }

    #[test]
    fn test_forward_with_explicit_rate() {
        let result = forward(
            &GstCalculator::new(),
            &ConfigState::default(),
            &forward_args("1000", Some("18")),
        )
        .unwrap();
        assert_eq!(result.formatted.gst_amount, "₹180.00");
        assert_eq!(result.formatted.total_price, "₹1,180.00");
    }

    #[test]
    fn test_forward_with_category_rate() {
        let result = forward(
            &GstCalculator::new(),
            &ConfigState::default(),
            &forward_args("500", Some("essential")),
        )
        .unwrap();
        assert_eq!(result.gst_rate, 5.0);
        assert_eq!(result.formatted.total_price, "₹525.00");
    }

    #[test]
    fn test_missing_rate_uses_configured_default() {
        let config = ConfigState {
            default_rate: 40.0,
            ..ConfigState::default()
        };
        let result = forward(&GstCalculator::new(), &config, &forward_args("2000", None)).unwrap();
        assert_eq!(result.gst_rate, 40.0);
        assert_eq!(result.formatted.total_price, "₹2,800.00");
    }

    #[test]
    fn test_reverse_scenario() {
        let result = reverse(
            &GstCalculator::new(),
            &ConfigState::default(),
            &reverse_args("₹1,180", Some("18")),
        )
        .unwrap();
        assert_eq!(result.formatted.base_price, "₹1,000.00");
        assert_eq!(result.formatted.gst_amount, "₹180.00");
    }

    #[test]
    fn test_unparseable_price_is_a_notice() {
        let err = forward(
            &GstCalculator::new(),
            &ConfigState::default(),
            &forward_args("twelve", Some("18")),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(
            err.message,
            "Please enter a valid base price (non-negative number)"
        );
    }

    #[test]
    fn test_out_of_range_rate_reaches_core() {
        let err = reverse(
            &GstCalculator::new(),
            &ConfigState::default(),
            &reverse_args("100", Some("-5")),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.argument, Some(Argument::GstRate));
    }

    #[test]
    fn test_unknown_category() {
        let err = forward(
            &GstCalculator::new(),
            &ConfigState::default(),
            &forward_args("100", Some("premium")),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCategory);
    }
}
