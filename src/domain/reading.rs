//! Result of a single angle computation

use crate::domain::{Angle, Hour, Minute};

/// Angle together with the input it was computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleReading {
    /// Hour as supplied (before normalization)
    pub hour: Hour,
    /// Minute as supplied (before normalization)
    pub minute: Minute,
    /// Smaller angle between the hands
    pub angle: Angle,
    /// Whether both inputs were within range
    pub in_range: bool,
}
