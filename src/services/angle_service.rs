//! Angle computation service
//!
//! Applies the validation policy to clock input before computing the angle.

use crate::domain::{compute_angle, AngleReading, Hour, Minute, ValidationPolicy};
use crate::error::DomainError;

/// Service for computing hand angles under a validation policy
pub struct AngleService {
    policy: ValidationPolicy,
}

impl AngleService {
    /// Create a new angle service
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Compute the angle for an already-parsed hour and minute
    ///
    /// # Errors
    /// Under [`ValidationPolicy::Strict`], returns `DomainError::InvalidHour`
    /// or `DomainError::InvalidMinute` for out-of-range input.
    pub fn compute(&self, hour: Hour, minute: Minute) -> Result<AngleReading, DomainError> {
        let in_range = self.check(hour, minute)?;

        let angle = compute_angle(hour, minute);
        log::debug!("Angle at {}:{} is {}", hour, minute, angle);

        Ok(AngleReading {
            hour,
            minute,
            angle,
            in_range,
        })
    }

    /// Parse raw command-line values, then compute
    ///
    /// # Errors
    /// Returns `DomainError::InvalidNumber` if either value is not an integer.
    pub fn compute_str(&self, hour: &str, minute: &str) -> Result<AngleReading, DomainError> {
        let hour: Hour = hour.parse()?;
        let minute: Minute = minute.parse()?;
        self.compute(hour, minute)
    }

    /// Get the configured policy
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn check(&self, hour: Hour, minute: Minute) -> Result<bool, DomainError> {
        if hour.is_in_range() && minute.is_in_range() {
            return Ok(true);
        }

        match self.policy {
            ValidationPolicy::Warn => {
                log::warn!("Wrong input: hour={}, minute={}", hour, minute.value());
                Ok(false)
            }
            ValidationPolicy::Strict if !hour.is_in_range() => {
                Err(DomainError::InvalidHour(hour.value()))
            }
            ValidationPolicy::Strict => Err(DomainError::InvalidMinute(minute.value())),
        }
    }
}

impl Default for AngleService {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}
