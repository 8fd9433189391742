//! # CLI Commands Module
//!
//! Every subcommand the `gst` binary exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── calculate.rs  ◄─── forward / reverse GST
//! ├── rates.rs      ◄─── Rate table
//! └── config.rs     ◄─── Effective configuration
//! ```
//!
//! ## Dependency Injection
//! Each command takes only what it needs, passed in by [`crate::execute`]:
//! ```rust,ignore
//! // Needs the calculator and the default rate
//! fn forward(calculator: &GstCalculator, config: &ConfigState, args: &ForwardArgs)
//!
//! // Needs only the calculator
//! fn get_rates(calculator: &GstCalculator)
//! ```
//! Commands return data, never print; rendering lives in [`crate::output`].

pub mod calculate;
pub mod config;
pub mod rates;
