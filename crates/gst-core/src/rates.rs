//! # GST Rate Table
//!
//! The published GST slabs, exposed as a read-only reference table.
//!
//! ## Rate Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GST Slabs                                       │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐    │
//! │  │  Exempted   │  │  Essential  │  │  Standard   │  │   Luxury    │    │
//! │  │     0%      │  │     5%      │  │    18%      │  │    40%      │    │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └─────────────┘    │
//! │                                                                         │
//! │  The table is REFERENCE ONLY: the calculator accepts any rate in       │
//! │  [0, 100], not just these four values.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::UnknownCategory;

// =============================================================================
// Rate Category
// =============================================================================

/// A named GST slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    /// Exempt goods (fresh produce, etc.).
    Exempted,
    /// Essential goods.
    Essential,
    /// Most goods and services.
    Standard,
    /// Luxury and sin goods.
    Luxury,
}

impl RateCategory {
    /// Every category, lowest rate first.
    pub const ALL: [RateCategory; 4] = [
        RateCategory::Exempted,
        RateCategory::Essential,
        RateCategory::Standard,
        RateCategory::Luxury,
    ];

    /// Returns the rate for this category as a percentage.
    #[inline]
    pub const fn rate(&self) -> f64 {
        GST_RATES.get(*self)
    }

    /// Returns the lowercase category name.
    pub const fn name(&self) -> &'static str {
        match self {
            RateCategory::Exempted => "exempted",
            RateCategory::Essential => "essential",
            RateCategory::Standard => "standard",
            RateCategory::Luxury => "luxury",
        }
    }
}

impl fmt::Display for RateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateCategory {
    type Err = UnknownCategory;

    /// Parses a category name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RateCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

// =============================================================================
// Rate Table
// =============================================================================

/// The rate table, keyed by category.
///
/// ## Serialization
/// ```json
/// { "exempted": 0.0, "essential": 5.0, "standard": 18.0, "luxury": 40.0 }
/// ```
///
/// `Copy` on purpose: callers always receive their own copy and can never
/// mutate [`GST_RATES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct GstRates {
    pub exempted: f64,
    pub essential: f64,
    pub standard: f64,
    pub luxury: f64,
}

/// The published GST slabs.
pub const GST_RATES: GstRates = GstRates {
    exempted: 0.0,
    essential: 5.0,
    standard: 18.0,
    luxury: 40.0,
};

impl GstRates {
    /// Looks up the rate for a category.
    #[inline]
    pub const fn get(&self, category: RateCategory) -> f64 {
        match category {
            RateCategory::Exempted => self.exempted,
            RateCategory::Essential => self.essential,
            RateCategory::Standard => self.standard,
            RateCategory::Luxury => self.luxury,
        }
    }

    /// Iterates `(category, rate)` pairs, lowest rate first.
    pub fn iter(&self) -> impl Iterator<Item = (RateCategory, f64)> + '_ {
        RateCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Default for GstRates {
    fn default() -> Self {
        GST_RATES
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_published_rates() {
        assert_eq!(GST_RATES.exempted, 0.0);
        assert_eq!(GST_RATES.essential, 5.0);
        assert_eq!(GST_RATES.standard, 18.0);
        assert_eq!(GST_RATES.luxury, 40.0);
    }

    #[test]
    fn test_serializes_to_keyed_object() {
        let json = serde_json::to_value(GST_RATES).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "exempted": 0.0,
                "essential": 5.0,
                "standard": 18.0,
                "luxury": 40.0
            })
        );
    }

    #[test]
    fn test_copy_cannot_touch_shared_table() {
        let mut rates = GstRates::default();
        rates.luxury = 99.0;
        assert_eq!(GST_RATES.luxury, 40.0);
        assert_eq!(RateCategory::Luxury.rate(), 40.0);
    }

    #[rstest]
    #[case("exempted", RateCategory::Exempted)]
    #[case("Essential", RateCategory::Essential)]
    #[case("  STANDARD ", RateCategory::Standard)]
    #[case("luxury", RateCategory::Luxury)]
    fn parses_category_names(#[case] input: &str, #[case] expected: RateCategory) {
        assert_eq!(input.parse::<RateCategory>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_category() {
        let err = "premium".parse::<RateCategory>().unwrap_err();
        assert_eq!(err.0, "premium");
    }

    #[test]
    fn test_iter_is_ordered_by_rate() {
        let rates: Vec<f64> = GST_RATES.iter().map(|(_, rate)| rate).collect();
        assert_eq!(rates, vec![0.0, 5.0, 18.0, 40.0]);
    }
}
