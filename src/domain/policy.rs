//! Validation policy for out-of-range clock input

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when the hour or minute is out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log a warning and compute with the raw values
    #[default]
    Warn,
    /// Reject the input with an error
    Strict,
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Warn => write!(f, "warn"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Warn);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationPolicy::Strict.to_string(), "strict");
    }
}
