//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigFile};
use crate::domain::ValidationPolicy;
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load. Without one the default locations are
    /// searched; finding no file is not an error, but a broken one is.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI output format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.general.format = f;
        }
        self
    }

    /// Override with CLI strict flag
    pub fn with_strict(mut self, strict: Option<bool>) -> Self {
        if let Some(true) = strict {
            self.config.validation.policy = ValidationPolicy::Strict;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert_eq!(config.validation.policy, ValidationPolicy::Warn);
    }

    #[test]
    fn test_cli_verbose_raises_log_level() {
        let config = ConfigBuilder::new().with_verbose(Some(true)).build();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_format(Some(OutputFormat::Compact))
            .with_strict(Some(true))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.general.format, OutputFormat::Compact);
        assert_eq!(config.validation.policy, ValidationPolicy::Strict);
    }

    #[test]
    fn test_strict_false_keeps_file_policy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[validation]\npolicy = \"strict\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(&path))
            .unwrap()
            .with_strict(Some(false))
            .build();

        assert_eq!(config.validation.policy, ValidationPolicy::Strict);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/clockangle.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
