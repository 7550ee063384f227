use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scripture::SECTIONS_FILE;

/// Persisted settings for bibirble
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one `<book>.json` file per book
    pub input_dir: PathBuf,

    /// Where the build writes the sections file
    pub output: PathBuf,

    /// Sections file read by `books` and `reveal`; searched for when unset
    pub data_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_dir: PathBuf::from("tools"),
            output: PathBuf::from(SECTIONS_FILE),
            data_path: None,
        }
    }
}

impl Settings {
    /// Load settings from the config directory
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Settings::default()),
        }
    }

    /// Load settings from a specific file, falling back to defaults when it is absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(config_path)?;
        let settings: Settings = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bibirble").join("config.toml"))
    }

    /// Write the default settings file and return where it went
    pub fn init_default() -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };
        Settings::default().save_to(&config_path)?;
        Ok(Some(config_path))
    }
}
