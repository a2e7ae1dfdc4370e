//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

use crate::storybook::{DeviceProfile, ThemeMode};

/// Default theme for newly selected stories
pub const DEFAULT_THEME: ThemeMode = ThemeMode::Light;

/// Default locale tag
pub const DEFAULT_LOCALE: &str = crate::storybook::DEFAULT_LOCALE;

/// Render hooks see inspection mode unless the user turns it off
pub const DEFAULT_INSPECTION_MODE: bool = true;

/// Default config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.composebook/config.json";

/// Built-in device presets, default first
pub fn default_devices() -> Vec<DeviceProfile> {
    DeviceProfile::presets()
}
