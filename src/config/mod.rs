//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::args::OutputFormat;
use crate::domain::ValidationPolicy;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Input validation settings
    pub validation: ValidationConfig,
}

impl Config {
    /// Default log level: `Debug` when verbose, `Warn` otherwise
    ///
    /// `RUST_LOG` still takes precedence when the logger is built.
    pub fn log_level(&self) -> LevelFilter {
        if self.general.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// General configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Output format
    pub format: OutputFormat,
}

/// Input validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Policy for out-of-range hour/minute values
    pub policy: ValidationPolicy,
}
