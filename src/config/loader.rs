//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::{Result, ResultExt, StorybookError};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;

/// Default config file path with `~` expanded
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Read and parse a config file, reporting every failure.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|source| StorybookError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StorybookError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from ~/.composebook/config.json
///
/// Returns Config::default() if the file is missing or invalid.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    load_config_or_default(&config_path())
}

/// Lenient load from an explicit path; failures are logged, not returned.
pub fn load_config_or_default(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let config = load_config_from(path).warn_on_err().unwrap_or_default();
    info!(path = %path.display(), theme = %config.get_theme(), "Config resolved");
    config
}
