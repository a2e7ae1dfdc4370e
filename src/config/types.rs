//! Configuration type definitions

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storybook::{DeviceProfile, StoryEnvironment, ThemeMode};

use super::defaults::*;

/// Host settings read from `config.json`. Every field is optional; the
/// `get_*` accessors fill in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Theme new selections start in (`light` | `dark`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    /// BCP-47 style locale tag, e.g. "en-US"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Name of the device profile to preview on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Extra named profiles, looked up before the built-in presets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceProfile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_mode: Option<bool>,
}

impl Config {
    /// Returns the theme, or DEFAULT_THEME if not configured
    pub fn get_theme(&self) -> ThemeMode {
        self.theme.unwrap_or(DEFAULT_THEME)
    }

    /// Returns the locale, or DEFAULT_LOCALE if not configured or blank
    pub fn get_locale(&self) -> String {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
            .to_string()
    }

    /// Every known profile: user-defined ones first, then the presets
    pub fn get_devices(&self) -> Vec<DeviceProfile> {
        let mut devices = self.devices.clone().unwrap_or_default();
        devices.extend(default_devices());
        devices
    }

    /// Returns the configured device profile.
    ///
    /// Names match case-insensitively. An unknown name logs a warning and
    /// falls back to the default profile.
    pub fn get_device(&self) -> DeviceProfile {
        let Some(name) = self.device.as_deref() else {
            return DeviceProfile::default();
        };
        match find_device(&self.get_devices(), name) {
            Some(device) => device,
            None => {
                warn!(device = name, "Unknown device profile, using default");
                DeviceProfile::default()
            }
        }
    }

    /// Returns whether inspection mode is on, or DEFAULT_INSPECTION_MODE
    pub fn get_inspection_mode(&self) -> bool {
        self.inspection_mode.unwrap_or(DEFAULT_INSPECTION_MODE)
    }

    /// The default environment new story selections start from
    pub fn environment(&self) -> StoryEnvironment {
        StoryEnvironment::new(self.get_theme(), self.get_locale(), self.get_device())
    }
}

/// Case-insensitive lookup of a profile by name
pub fn find_device(devices: &[DeviceProfile], name: &str) -> Option<DeviceProfile> {
    let name = name.trim();
    devices
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
        .cloned()
}
