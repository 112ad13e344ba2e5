//! Confidence score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A founder readiness score between 0 and 100 inclusive.
///
/// Derived from a complete profile on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    /// Zero confidence.
    pub const ZERO: Self = Self(0);

    /// Maximum confidence.
    pub const MAX: Self = Self(100);

    /// Creates a new score, clamping to the valid range.
    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "confidence_score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ConfidenceScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
