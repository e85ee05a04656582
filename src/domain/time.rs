//! Clock input types
//!
//! Hour and minute values as read from the command line. Construction never
//! fails on range: callers decide what to do with out-of-range values via
//! [`Hour::is_in_range`] and [`Minute::is_in_range`].

use crate::error::DomainError;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Hour on a 12-hour dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(i64);

impl Hour {
    /// Minimum valid hour
    pub const MIN: i64 = 0;
    /// Maximum valid hour (12 is the same dial position as 0)
    pub const MAX: i64 = 12;

    /// Create a new Hour (not range checked)
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value as supplied
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the hour is within 0-12
    pub fn is_in_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// Value used for computation: 12 becomes 0
    pub fn normalized(&self) -> i64 {
        if self.0 == Self::MAX {
            0
        } else {
            self.0
        }
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Hour {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integer("hour", s).map(Self)
    }
}

/// Minute within an hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minute(i64);

impl Minute {
    /// Minimum valid minute
    pub const MIN: i64 = 0;
    /// Maximum accepted minute (60 is the same dial position as 0)
    pub const MAX: i64 = 60;

    /// Create a new Minute (not range checked)
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value as supplied
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the minute is within 0-60
    pub fn is_in_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// Value used for computation: 60 becomes 0
    pub fn normalized(&self) -> i64 {
        if self.0 == Self::MAX {
            0
        } else {
            self.0
        }
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Minute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integer("minute", s).map(Self)
    }
}

fn parse_integer(field: &'static str, s: &str) -> Result<i64, DomainError> {
    s.trim().parse::<i64>().map_err(|e| {
        let value = s.to_string();
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                DomainError::NumberTooLarge { field, value }
            }
            _ => DomainError::InvalidNumber { field, value },
        }
    })
}
