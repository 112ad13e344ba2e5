//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier for an assessment session.
///
/// Issued by the backend when a session starts; treated as an opaque
/// non-empty string on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentSessionId(String);

impl AssessmentSessionId {
    /// Creates a session id, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssessmentSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a single assessment question or scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a question id, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a submitted intake record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeId(Uuid);

impl IntakeId {
    /// Creates a new random IntakeId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an IntakeId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for IntakeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IntakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IntakeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_non_empty_string() {
        let id = AssessmentSessionId::new("sess-abc-123").unwrap();
        assert_eq!(id.as_str(), "sess-abc-123");
    }

    #[test]
    fn session_id_rejects_empty_string() {
        let result = AssessmentSessionId::new("");
        assert!(result.is_err());
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn session_id_rejects_whitespace_string() {
        assert!(AssessmentSessionId::new("   ").is_err());
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = AssessmentSessionId::new("sess-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sess-1\"");
    }

    #[test]
    fn question_id_accepts_non_empty_string() {
        let id = QuestionId::new("Q_017").unwrap();
        assert_eq!(id.as_str(), "Q_017");
    }

    #[test]
    fn question_id_rejects_empty_string() {
        assert!(QuestionId::new("").is_err());
    }

    #[test]
    fn question_id_displays_correctly() {
        let id = QuestionId::new("DEMO_001").unwrap();
        assert_eq!(format!("{}", id), "DEMO_001");
    }

    #[test]
    fn intake_id_generates_unique_values() {
        let id1 = IntakeId::new();
        let id2 = IntakeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn intake_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: IntakeId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn intake_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = IntakeId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
