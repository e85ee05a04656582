//! Service layer
//!
//! Services apply policy around the pure domain computation.

pub mod angle_service;

pub use angle_service::AngleService;
