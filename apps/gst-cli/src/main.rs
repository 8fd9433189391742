//! # GST CLI Entry Point
//!
//! ```text
//! $ gst forward 1000 18
//! GST Amount:  ₹180.00
//! Total Price: ₹1,180.00
//!
//! $ gst reverse ₹1,180 standard
//! Base Price:  ₹1,000.00
//! GST Amount:  ₹180.00
//!
//! $ gst forward abc
//! Please enter a valid base price (non-negative number)
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    gst_cli::run()
}
