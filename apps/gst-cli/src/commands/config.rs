//! # Config Command
//!
//! Shows the configuration the CLI is running with.

use tracing::debug;

use crate::config::ConfigState;

/// Gets the effective configuration (defaults merged with `GST_*` variables).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("config command");
    config.clone()
}
