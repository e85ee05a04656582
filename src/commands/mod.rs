//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod angle;

pub use angle::run_angle;
