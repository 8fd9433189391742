//! # Rates Command
//!
//! Lists the published GST slabs.

use tracing::debug;

use gst_core::{GstCalculator, GstRates};

/// Gets a copy of the rate table.
///
/// ## When Used
/// - Picking a category name to pass as `RATE`
/// - Scripts that need the slab values (`gst rates --json`)
pub fn get_rates(calculator: &GstCalculator) -> GstRates {
    debug!("rates command");
    calculator.gst_rates()
}
