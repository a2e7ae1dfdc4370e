//! Configuration module - host settings
//!
//! - Loading configuration from ~/.composebook/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct and its `get_*` accessors
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    default_devices, DEFAULT_CONFIG_PATH, DEFAULT_INSPECTION_MODE, DEFAULT_LOCALE, DEFAULT_THEME,
};
pub use loader::{config_path, load_config, load_config_from, load_config_or_default};
pub use types::{find_device, Config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
