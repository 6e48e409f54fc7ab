//! Persisted user preferences.
//!
//! A single TOML file in the platform config directory holding the default
//! key layout. A missing file means defaults; a malformed file is an error
//! rather than a silent fallback.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::keycodes::KeymapLayout;

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/vilview/config.toml`
/// - macOS: `~/Library/Application Support/vilview/config.toml`
/// - Windows: `%APPDATA%\vilview\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Key layout used when no `--layout` flag is given.
    #[serde(default)]
    pub layout: KeymapLayout,
}

impl Config {
    /// Gets the platform-specific config directory path.
    ///
    /// The `VILVIEW_CONFIG_DIR` environment variable overrides the platform
    /// default, which test harnesses use for isolation.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Creates the config directory if needed; writes to a temp file and
    /// renames it into place.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &config_path).with_context(|| {
            format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            )
        })?;

        Ok(())
    }
}
