//! Unified error types for clockangle
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (stdout, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Argument is not an integer
    #[error("Invalid {field}: '{value}' is not an integer")]
    InvalidNumber { field: &'static str, value: String },

    /// Integer too large to represent
    #[error("Invalid {field}: '{value}' is out of representable range")]
    NumberTooLarge { field: &'static str, value: String },

    /// Hour outside 0-12
    #[error("Invalid hour: {0} (must be 0-12)")]
    InvalidHour(i64),

    /// Minute outside 0-60
    #[error("Invalid minute: {0} (must be 0-60)")]
    InvalidMinute(i64),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
