//! # Money Module
//!
//! Indian Rupee display formatting.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Calculator math runs in f64 and is returned unrounded.                 │
//! │                                                                         │
//! │    100 × 7% = 7.000000000000001   (raw gstAmount, kept as-is)           │
//! │                                                                         │
//! │  Rounding happens exactly once, here, on the shortest decimal form      │
//! │  of the value (what `to_string` prints), never on `amount × 100`:       │
//! │                                                                         │
//! │    7.000000000000001 → 700 paise → "₹7.00"                              │
//! │    2.9 × 5% = 0.145  → 15 paise  → "₹0.15"   (0.145 × 100 = 14.4999…)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indian Digit Grouping
//! The last three digits form one group, every group above that has two:
//! `₹1,23,45,678.90` (one crore, twenty-three lakh, ...).
//!
//! ## Usage
//! ```rust
//! use gst_core::money::{format_currency, Money};
//!
//! assert_eq!(format_currency(1180.0), "₹1,180.00");
//! assert_eq!(Money::from_paise(1_234_567_890).to_string(), "₹1,23,45,678.90");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// The Indian Rupee sign.
pub const RUPEE_SYMBOL: &str = "₹";

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount held as integer paise (1/100 rupee).
///
/// Only used for display; the calculator itself works in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use gst_core::money::Money;
    ///
    /// let price = Money::from_paise(118000); // ₹1,180.00
    /// assert_eq!(price.rupees(), 1180);
    /// assert_eq!(price.paise_part(), 0);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Converts a rupee amount to paise, rounding half away from zero.
    ///
    /// The tie is decided on the shortest decimal that round-trips to
    /// `amount`, so `1.005` becomes 101 paise even though the nearest
    /// double is slightly below 1.005.
    ///
    /// Returns `None` for NaN, infinities and amounts whose paise value
    /// does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use gst_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(0.125), Some(Money::from_paise(13)));
    /// assert_eq!(Money::from_rupees(1.005), Some(Money::from_paise(101)));
    /// assert_eq!(Money::from_rupees(-5.5), Some(Money::from_paise(-550)));
    /// assert_eq!(Money::from_rupees(f64::NAN), None);
    /// ```
    pub fn from_rupees(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // Below half a paisa; also keeps long expansions like 1e-300 out of Decimal
        if amount.abs() < 0.005 {
            return Some(Money(0));
        }

        // Fails above Decimal::MAX (~7.9e28)
        let exact = Decimal::from_str(&amount.to_string()).ok()?;
        let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        rounded
            .checked_mul(Decimal::from(PAISE_PER_RUPEE))?
            .to_i64()
            .map(Money)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Renders en-IN currency text: `₹1,23,456.78`, `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            RUPEE_SYMBOL,
            group_indian(&self.rupees().unsigned_abs().to_string()),
            self.paise_part()
        )
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a rupee amount as Indian Rupee text with exactly two decimals.
///
/// ## Rules
/// - `₹` symbol, Indian digit grouping
/// - Rounded half away from zero at the 2nd decimal
/// - Negative amounts are prefixed with `-`
/// - NaN and infinities render as `₹NaN`, `₹∞`, `-₹∞`
///
/// ## Example
/// ```rust
/// use gst_core::money::format_currency;
///
/// assert_eq!(format_currency(180.00000000000003), "₹180.00");
/// assert_eq!(format_currency(12345678.9), "₹1,23,45,678.90");
/// assert_eq!(format_currency(-5.5), "-₹5.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{RUPEE_SYMBOL}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{RUPEE_SYMBOL}∞");
    }

    match Money::from_rupees(amount) {
        Some(money) => money.to_string(),
        // Beyond i64 paise every f64 is a whole number, so the fraction is .00
        None => {
            let sign = if amount < 0.0 { "-" } else { "" };
            let digits = format!("{:.0}", amount.abs());
            format!("{sign}{RUPEE_SYMBOL}{}.00", group_indian(&digits))
        }
    }
}

/// Inserts Indian grouping commas into a run of ASCII digits.
///
/// `"12345678"` → `"1,23,45,678"`
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(118050);
        assert_eq!(money.paise(), 118050);
        assert_eq!(money.rupees(), 1180);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_negative_parts() {
        let refund = Money::from_paise(-550);
        assert!(refund.is_negative());
        assert_eq!(refund.rupees(), -5);
        assert_eq!(refund.paise_part(), 50);
    }

    #[rstest]
    #[case::exact_tie_up(0.125, 13)]
    #[case::exact_tie_negative(-0.125, -13)]
    #[case::below_tie(1.004, 100)]
    #[case::float_noise(180.00000000000003, 18000)]
    #[case::decimal_tie_below_in_binary(1.005, 101)]
    #[case::decimal_tie_from_product(0.145, 15)]
    #[case::decimal_tie_negative(-1.005, -101)]
    #[case::just_below_tie(0.40499999999999997, 40)]
    #[case::half_paisa(0.005, 1)]
    #[case::tiny_negative(-0.001, 0)]
    #[case::subnormal(1e-300, 0)]
    fn rounds_half_away_from_zero(#[case] rupees: f64, #[case] paise: i64) {
        assert_eq!(Money::from_rupees(rupees), Some(Money::from_paise(paise)));
    }

    #[test]
    fn test_from_rupees_rejects_unrepresentable() {
        assert_eq!(Money::from_rupees(f64::INFINITY), None);
        assert_eq!(Money::from_rupees(1e20), None);
    }

    #[rstest]
    #[case(0, "₹0.00")]
    #[case(1, "₹0.01")]
    #[case(99999, "₹999.99")]
    #[case(100000, "₹1,000.00")]
    #[case(118000, "₹1,180.00")]
    #[case(10000000, "₹1,00,000.00")]
    #[case(1234567890, "₹1,23,45,678.90")]
    #[case(-550, "-₹5.50")]
    #[case(-12345600, "-₹1,23,456.00")]
    fn displays_indian_grouping(#[case] paise: i64, #[case] expected: &str) {
        assert_eq!(Money::from_paise(paise).to_string(), expected);
    }

    #[rstest]
    #[case(180.0, "₹180.00")]
    #[case(1180.0, "₹1,180.00")]
    #[case(25.0, "₹25.00")]
    #[case(847.457627118644, "₹847.46")]
    #[case(0.0, "₹0.00")]
    #[case(-0.0, "₹0.00")]
    #[case(12345678.9, "₹1,23,45,678.90")]
    #[case(1.005, "₹1.01")]
    #[case(1.035, "₹1.04")]
    #[case(-2.675, "-₹2.68")]
    fn formats_currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[test]
    fn test_format_currency_beyond_paise_range() {
        assert_eq!(format_currency(1e20), "₹10,00,00,00,00,00,00,00,00,000.00");
        assert_eq!(format_currency(-1e20), "-₹10,00,00,00,00,00,00,00,00,000.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("7"), "7");
        assert_eq!(group_indian("678"), "678");
        assert_eq!(group_indian("5678"), "5,678");
        assert_eq!(group_indian("45678"), "45,678");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }
}
