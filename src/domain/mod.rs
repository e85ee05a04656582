//! Domain models for clockangle
//!
//! Clock input types and the hand angle computation.

pub mod angle;
pub mod policy;
pub mod reading;
pub mod time;

pub use angle::{compute_angle, Angle};
pub use policy::ValidationPolicy;
pub use reading::AngleReading;
pub use time::{Hour, Minute};
