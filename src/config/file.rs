//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::Config;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The first existing file wins. Returns `Ok(None)` when none exists.
    pub fn load_default() -> Result<Option<Config>, ConfigError> {
        match Self::default_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load(path).map(Some),
            None => Ok(None),
        }
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/clockangle/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("clockangle").join("config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("clockangle.toml"));
        paths.push(PathBuf::from(".clockangle.toml"));

        paths
    }
}
