//! Rendering environment: theme, locale and device.
//!
//! These values are descriptive only. The core carries them in the runtime
//! state and hands them to render hooks through [`StoryContext`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Named screen size and density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub name: String,
    pub width_dp: u32,
    pub height_dp: u32,
    pub density: f32,
}

impl DeviceProfile {
    pub fn new(name: impl Into<String>, width_dp: u32, height_dp: u32, density: f32) -> Self {
        Self {
            name: name.into(),
            width_dp,
            height_dp,
            density,
        }
    }

    pub fn phone() -> Self {
        Self::new("Phone", 360, 800, 2.0)
    }

    pub fn small_phone() -> Self {
        Self::new("Small Phone", 320, 640, 2.0)
    }

    pub fn tablet() -> Self {
        Self::new("Tablet", 800, 1280, 2.0)
    }

    /// Built-in profiles, default first.
    pub fn presets() -> Vec<DeviceProfile> {
        vec![Self::phone(), Self::small_phone(), Self::tablet()]
    }

    pub fn width_px(&self) -> u32 {
        (self.width_dp as f32 * self.density).round() as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.height_dp as f32 * self.density).round() as u32
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::phone()
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}dp @{}x)",
            self.name, self.width_dp, self.height_dp, self.density
        )
    }
}

/// Context a story renders in. Immutable; build a new one to change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryEnvironment {
    pub theme: ThemeMode,
    pub locale: String,
    pub device: DeviceProfile,
}

impl StoryEnvironment {
    pub fn new(theme: ThemeMode, locale: impl Into<String>, device: DeviceProfile) -> Self {
        Self {
            theme,
            locale: locale.into(),
            device,
        }
    }

    pub fn with_theme(&self, theme: ThemeMode) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..self.clone()
        }
    }

    pub fn with_device(&self, device: DeviceProfile) -> Self {
        Self {
            device,
            ..self.clone()
        }
    }
}

impl Default for StoryEnvironment {
    fn default() -> Self {
        Self::new(ThemeMode::Light, DEFAULT_LOCALE, DeviceProfile::default())
    }
}

/// What a render hook can see besides its props.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryContext {
    pub environment: StoryEnvironment,
    /// True inside the showcase host. What a component does with it is up to
    /// the component.
    pub inspection_mode: bool,
}

impl StoryContext {
    /// Context for rendering inside the showcase (inspection mode on).
    pub fn new(environment: StoryEnvironment) -> Self {
        Self {
            environment,
            inspection_mode: true,
        }
    }

    pub fn with_inspection_mode(mut self, inspection_mode: bool) -> Self {
        self.inspection_mode = inspection_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment() {
        let env = StoryEnvironment::default();
        assert_eq!(env.theme, ThemeMode::Light);
        assert_eq!(env.locale, "en-US");
        assert_eq!(env.device, DeviceProfile::new("Phone", 360, 800, 2.0));
    }

    #[test]
    fn test_with_theme_changes_only_theme() {
        let env = StoryEnvironment::default();
        let dark = env.with_theme(ThemeMode::Dark);
        assert_eq!(dark.theme, ThemeMode::Dark);
        assert_eq!(dark.locale, env.locale);
        assert_eq!(dark.device, env.device);
        assert_eq!(env.theme, ThemeMode::Light);
    }

    #[test]
    fn test_with_locale_changes_only_locale() {
        let env = StoryEnvironment::default().with_theme(ThemeMode::Dark);
        let fr = env.with_locale("fr-FR");
        assert_eq!(fr.locale, "fr-FR");
        assert_eq!(fr.theme, ThemeMode::Dark);
        assert_eq!(fr.device, env.device);
        assert_eq!(env.locale, "en-US");
    }

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_device_pixels() {
        let tablet = DeviceProfile::tablet();
        assert_eq!(tablet.width_px(), 1600);
        assert_eq!(tablet.height_px(), 2560);
        assert_eq!(DeviceProfile::presets()[0], DeviceProfile::default());
    }

    #[test]
    fn test_context_defaults_to_inspection_mode() {
        let ctx = StoryContext::new(StoryEnvironment::default());
        assert!(ctx.inspection_mode);
        assert!(!ctx.with_inspection_mode(false).inspection_mode);
    }

    #[test]
    fn test_environment_serde_camel_case() {
        let json = serde_json::to_value(StoryEnvironment::default()).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["device"]["widthDp"], 360);
    }
}
