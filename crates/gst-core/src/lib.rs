//! # gst-core: Pure GST Calculation Logic
//!
//! This crate computes India's Goods & Services Tax in both directions and
//! formats the results as Indian Rupee text. Every function is pure: no I/O,
//! no logging, no global mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     GST Calculator Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    gst-cli (binary: gst)                        │   │
//! │  │    parse raw input ──► call core ──► render text / JSON         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gst-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calculator │  │   rates   │  │   money   │  │ validation│  │   │
//! │  │   │  forward   │  │ GstRates  │  │  Money    │  │  bounds   │  │   │
//! │  │   │  reverse   │  │ Category  │  │  ₹ format │  │  checks   │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Forward/reverse calculation and result records
//! - [`rates`] - The published GST slabs
//! - [`money`] - Rupee formatting with Indian digit grouping
//! - [`validation`] - Argument bounds
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gst_core::{GstCalculator, RateCategory};
//!
//! let calculator = GstCalculator::new();
//! let rate = RateCategory::Standard.rate(); // 18%
//!
//! let result = calculator.calculate_forward(1000.0, rate).unwrap();
//! assert_eq!(result.formatted.gst_amount, "₹180.00");
//! assert_eq!(result.formatted.total_price, "₹1,180.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod rates;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{
    calculate_forward, calculate_reverse, gst_rates, ForwardFormatted, ForwardResult,
    GstCalculator, ReverseFormatted, ReverseResult,
};
pub use error::{Argument, Constraint, CoreResult, UnknownCategory, ValidationError};
pub use money::{format_currency, Money};
pub use rates::{GstRates, RateCategory, GST_RATES};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest accepted GST rate, in percent.
pub const MIN_GST_RATE: f64 = 0.0;

/// Highest accepted GST rate, in percent.
///
/// Applies to every entry point, not only the published slabs.
pub const MAX_GST_RATE: f64 = 100.0;
