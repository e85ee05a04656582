//! Angle between the clock hands
//!
//! The hour hand sweeps 0.5° per minute and the minute hand 6° per minute,
//! both measured from the 12:00 position.

use crate::domain::time::{Hour, Minute};
use serde::Serialize;
use std::fmt;

/// Degrees swept by the hour hand per minute
pub const HOUR_HAND_DEG_PER_MINUTE: f64 = 0.5;
/// Degrees swept by the minute hand per minute
pub const MINUTE_HAND_DEG_PER_MINUTE: f64 = 6.0;

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// One full turn
    pub const FULL_TURN: f64 = 360.0;

    /// Create a new Angle from degrees
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Get the angle in degrees
    #[inline]
    pub const fn as_degrees(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    /// Whole values keep one decimal place (`90.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Compute the smaller angle between the hour and minute hands
///
/// Out-of-range values are not rejected here; they flow through the same
/// arithmetic and may produce a result outside 0-180.
pub fn compute_angle(hour: Hour, minute: Minute) -> Angle {
    let h = hour.normalized() as f64;
    let m = minute.normalized() as f64;

    let hour_angle = HOUR_HAND_DEG_PER_MINUTE * (h * 60.0 + m);
    let minute_angle = MINUTE_HAND_DEG_PER_MINUTE * m;

    let diff = (hour_angle - minute_angle).abs();
    Angle((Angle::FULL_TURN - diff).min(diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle(h: i64, m: i64) -> f64 {
        compute_angle(Hour::new(h), Minute::new(m)).as_degrees()
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(angle(3, 0), 90.0);
        assert_eq!(angle(6, 0), 180.0);
        assert_eq!(angle(9, 0), 90.0);
        assert_eq!(angle(0, 0), 0.0);
    }

    #[test]
    fn test_twelve_and_sixty_normalize() {
        assert_eq!(angle(12, 0), 0.0);
        assert_eq!(angle(12, 60), 0.0);
        assert_eq!(angle(3, 60), 90.0);
    }

    #[test]
    fn test_minutes_move_hour_hand() {
        assert_eq!(angle(3, 30), 75.0);
        assert_eq!(angle(3, 15), 7.5);
        assert_eq!(angle(12, 30), 165.0);
        assert_eq!(angle(9, 45), 22.5);
    }

    #[test]
    fn test_valid_range_bounded() {
        for h in 0..=12 {
            for m in 0..60 {
                let a = angle(h, m);
                assert!((0.0..=180.0).contains(&a), "{}:{} gave {}", h, m, a);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(angle(7, 23), angle(7, 23));
    }

    #[test]
    fn test_out_of_range_still_computes() {
        // the fold against 360 only holds for a single turn
        assert_eq!(angle(13, 0), -30.0);
        assert_eq!(angle(-1, 0), 30.0);
        assert!(angle(i64::MAX, i64::MIN).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "90.0");
        assert_eq!(Angle::from_degrees(7.5).to_string(), "7.5");
        assert_eq!(Angle::from_degrees(180.0).to_string(), "180.0");
    }
}
