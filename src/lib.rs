//! clockangle - analog clock hand angle library
//!
//! Computes the smaller angle between the hour and minute hands of an
//! analog clock for a given hour and minute.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Clock input types and the angle computation
//! - [`error`]: Error types
//! - [`services`]: Validation policy around the computation

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use domain::{compute_angle, Angle, Hour, Minute};
pub use error::{AppError, Result};
