//! # Input Parsing
//!
//! Turns raw command-line text into calculator arguments.
//!
//! This is the boundary check that runs before the core: a field that is
//! not a usable number becomes a user-facing notice and the calculator is
//! never called. Range checks on the rate are left to the core.

use gst_core::money::RUPEE_SYMBOL;
use gst_core::{Argument, RateCategory, UnknownCategory};

use crate::error::ApiError;

/// Parses a price field.
///
/// Accepts plain decimals and tolerates a single leading `₹` and grouping
/// commas in either Indian (`1,18,000`) or Western (`118,000`) style.
/// Empty groups (`1,,0`, `,100`, `100,`) are rejected. Anything that is not
/// a finite, non-negative number yields the notice for `argument`.
pub fn parse_amount(raw: &str, argument: Argument) -> Result<f64, ApiError> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_prefix(RUPEE_SYMBOL)
        .unwrap_or(trimmed)
        .trim_start();

    let groups: Vec<&str> = number.split(',').collect();
    if groups.len() > 1 && groups.iter().any(|group| group.is_empty()) {
        return Err(ApiError::notice(argument));
    }

    match groups.concat().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ApiError::notice(argument)),
    }
}

/// Parses a rate field: a percentage (`18`, `12.5`, `18%`) or a category
/// name (`standard`).
///
/// Numbers are returned as-is, even out of range; the calculator decides.
pub fn parse_rate(raw: &str) -> Result<f64, UnknownCategory> {
    let trimmed = raw.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    if let Ok(rate) = numeric.parse::<f64>() {
        return Ok(rate);
    }

    trimmed.parse::<RateCategory>().map(|category| category.rate())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case::plain("1000", 1000.0)]
    #[case::decimal("1234.56", 1234.56)]
    #[case::padded("  525 ", 525.0)]
    #[case::zero("0", 0.0)]
    #[case::rupee_sign("₹1180", 1180.0)]
    #[case::indian_grouping("₹1,18,000.50", 118000.5)]
    #[case::western_grouping("118,000", 118000.0)]
    #[case::space_after_sign("₹ 1,180", 1180.0)]
    fn parses_amounts(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(raw, Argument::BasePrice).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::letters("abc")]
    #[case::trailing_garbage("12abc")]
    #[case::negative("-100")]
    #[case::infinity("inf")]
    #[case::nan("NaN")]
    #[case::double_rupee_sign("₹₹100")]
    #[case::empty_groups("1,,,0")]
    #[case::leading_comma(",100")]
    #[case::trailing_comma("100,")]
    #[case::lone_rupee_sign("₹")]
    fn rejects_unusable_amounts_with_notice(#[case] raw: &str) {
        let err = parse_amount(raw, Argument::TotalPrice).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.argument, Some(Argument::TotalPrice));
    }

    #[rstest]
    #[case::number("18", 18.0)]
    #[case::fraction("12.5", 12.5)]
    #[case::percent_sign("28%", 28.0)]
    #[case::out_of_range_passes_through("150", 150.0)]
    #[case::negative_passes_through("-5", -5.0)]
    #[case::category("standard", 18.0)]
    #[case::category_any_case("Luxury", 40.0)]
    #[case::exempt("exempted", 0.0)]
    fn parses_rates(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_rate(raw).unwrap(), expected);
    }

    #[test]
    fn test_unknown_rate_category() {
        let err = parse_rate("premium").unwrap_err();
        assert_eq!(err, UnknownCategory("premium".to_string()));
    }
}
