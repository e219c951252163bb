//! Configuration module for the loxt CLI.
//!
//! Settings live in a `loxt.toml` file; every field is optional and falls
//! back to its default.
//!
//! ```toml
//! verbose = false
//!
//! [scan]
//! format = "json"
//! strict_keywords = true
//! ```

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LoxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scan-specific configuration.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Options shared by the `scan` and `check` commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Default output format for `scan` (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Require keywords to end at an identifier boundary.
    #[serde(default)]
    pub strict_keywords: bool,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            strict_keywords: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/loxt/`, then the
    /// platform configuration directory. Returns the default configuration
    /// if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LoxtError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
