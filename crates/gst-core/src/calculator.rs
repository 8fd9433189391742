//! # GST Calculator
//!
//! Forward and reverse GST calculation.
//!
//! ## The Two Directions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  FORWARD (price before tax is known)                                   │
//! │    gst_amount  = base_price × (gst_rate / 100)                          │
//! │    total_price = base_price + gst_amount                                │
//! │                                                                         │
//! │    ₹1,000.00 @ 18%  ──►  GST ₹180.00, Total ₹1,180.00                   │
//! │                                                                         │
//! │  REVERSE (price on the sticker already includes tax)                   │
//! │    base_price = total_price / (1 + gst_rate / 100)                      │
//! │    gst_amount = total_price − base_price                                │
//! │                                                                         │
//! │    ₹1,180.00 @ 18%  ──►  Base ₹1,000.00, GST ₹180.00                    │
//! │                                                                         │
//! │  Arithmetic is plain f64. Raw fields are NOT rounded; only the         │
//! │  `formatted` strings are rounded to paise.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::GstCalculator;
//!
//! let calculator = GstCalculator::new();
//!
//! let forward = calculator.calculate_forward(1000.0, 18.0).unwrap();
//! assert_eq!(forward.formatted.total_price, "₹1,180.00");
//!
//! let reverse = calculator.calculate_reverse(1180.0, 18.0).unwrap();
//! assert_eq!(reverse.formatted.base_price, "₹1,000.00");
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{Argument, CoreResult};
use crate::money::format_currency;
use crate::rates::{GstRates, GST_RATES};
use crate::validation::{validate_gst_rate, validate_price};

// =============================================================================
// Result Records
// =============================================================================

/// Display strings for a forward calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ForwardFormatted {
    pub gst_amount: String,
    pub total_price: String,
}

/// Outcome of a forward calculation (base price → total).
///
/// ## Serialization
/// ```json
/// {
///   "basePrice": 1000.0,
///   "gstRate": 18.0,
///   "gstAmount": 180.0,
///   "totalPrice": 1180.0,
///   "formatted": { "gstAmount": "₹180.00", "totalPrice": "₹1,180.00" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResult {
    /// Price before GST, as given.
    pub base_price: f64,
    /// GST rate as a percentage, as given.
    pub gst_rate: f64,
    /// `base_price × gst_rate / 100`, unrounded.
    pub gst_amount: f64,
    /// `base_price + gst_amount`, unrounded.
    pub total_price: f64,
    pub formatted: ForwardFormatted,
}

/// Display strings for a reverse calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReverseFormatted {
    pub base_price: String,
    pub gst_amount: String,
}

/// Outcome of a reverse calculation (total → base price).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReverseResult {
    /// Price including GST, as given.
    pub total_price: f64,
    /// GST rate as a percentage, as given.
    pub gst_rate: f64,
    /// `total_price / (1 + gst_rate / 100)`, unrounded.
    pub base_price: f64,
    /// `total_price − base_price`, unrounded.
    pub gst_amount: f64,
    pub formatted: ReverseFormatted,
}

// =============================================================================
// Calculations
// =============================================================================

/// Computes GST on top of a base price.
///
/// ## Errors
/// - `InvalidType` if either argument is NaN or infinite
/// - `OutOfRange` if `base_price < 0` or `gst_rate` is outside `[0, 100]`
///
/// ## Example
/// ```rust
/// use gst_core::calculate_forward;
///
/// let result = calculate_forward(500.0, 5.0).unwrap();
/// assert!((result.gst_amount - 25.0).abs() < 1e-9);
/// assert_eq!(result.formatted.total_price, "₹525.00");
///
/// assert!(calculate_forward(-100.0, 18.0).is_err());
/// ```
pub fn calculate_forward(base_price: f64, gst_rate: f64) -> CoreResult<ForwardResult> {
    validate_price(Argument::BasePrice, base_price)?;
    validate_gst_rate(gst_rate)?;

    let gst_amount = base_price * (gst_rate / 100.0);
    let total_price = base_price + gst_amount;

    Ok(ForwardResult {
        base_price,
        gst_rate,
        gst_amount,
        total_price,
        formatted: ForwardFormatted {
            gst_amount: format_currency(gst_amount),
            total_price: format_currency(total_price),
        },
    })
}

/// Extracts the base price and GST from a tax-inclusive total.
///
/// The divisor is `1 + gst_rate / 100 >= 1`, so there is no division by
/// zero; at rate 0 the base price equals the total and GST is zero.
///
/// ## Errors
/// Same as [`calculate_forward`], applied to `total_price`.
pub fn calculate_reverse(total_price: f64, gst_rate: f64) -> CoreResult<ReverseResult> {
    validate_price(Argument::TotalPrice, total_price)?;
    validate_gst_rate(gst_rate)?;

    let base_price = total_price / (1.0 + gst_rate / 100.0);
    let gst_amount = total_price - base_price;

    Ok(ReverseResult {
        total_price,
        gst_rate,
        base_price,
        gst_amount,
        formatted: ReverseFormatted {
            base_price: format_currency(base_price),
            gst_amount: format_currency(gst_amount),
        },
    })
}

/// Returns a copy of the published rate table.
#[inline]
pub const fn gst_rates() -> GstRates {
    GST_RATES
}

// =============================================================================
// Calculator
// =============================================================================

/// Calculator handle for callers that want an injectable value.
///
/// Holds nothing but its copy of the rate table, so it is `Copy`,
/// `Send` and `Sync` and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GstCalculator {
    rates: GstRates,
}

impl GstCalculator {
    /// Creates a calculator with the published rate table.
    pub const fn new() -> Self {
        GstCalculator { rates: GST_RATES }
    }

    /// See [`calculate_forward`].
    pub fn calculate_forward(&self, base_price: f64, gst_rate: f64) -> CoreResult<ForwardResult> {
        calculate_forward(base_price, gst_rate)
    }

    /// See [`calculate_reverse`].
    pub fn calculate_reverse(&self, total_price: f64, gst_rate: f64) -> CoreResult<ReverseResult> {
        calculate_reverse(total_price, gst_rate)
    }

    /// See [`format_currency`].
    pub fn format_currency(&self, amount: f64) -> String {
        format_currency(amount)
    }

    /// Returns the rate table by value.
    pub const fn gst_rates(&self) -> GstRates {
        self.rates
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
