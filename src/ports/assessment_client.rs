//! Port to the remote assessment backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::{AssessmentProgress, Question, ResultsPayload};
use crate::domain::foundation::{
    AssessmentSessionId, ConfidenceScore, IntakeId, QuestionId, Timestamp,
};
use crate::domain::intake::BusinessContext;
use crate::domain::profile::FounderProfile;

/// Failure kinds at the client boundary. None is fatal to the flow; the
/// caller decides between surfacing a message and degrading to demo mode.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("connection failed: {reason}")]
    Connection { reason: String },

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("backend rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("malformed response body: {reason}")]
    Parse { reason: String },

    #[error("backend unavailable ({status})")]
    Unavailable { status: u16 },
}

impl ClientError {
    pub fn connection(reason: impl Into<String>) -> Self {
        Self::Connection {
            reason: reason.into(),
        }
    }

    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub fn unavailable(status: u16) -> Self {
        Self::Unavailable { status }
    }

    /// True for failures that mean the backend cannot currently be
    /// reached; these select the demo-fallback path instead of an error
    /// message.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Timeout { .. } | Self::Unavailable { .. }
        )
    }

    /// The backend's own rejection message, when one was sent.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Completed intake persisted before the assessment starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub intake_id: IntakeId,
    pub name: String,
    pub email: String,
    pub profile: FounderProfile,
    pub confidence: ConfidenceScore,
    pub submitted_at: Timestamp,
}

/// Request to open an assessment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub user_email: Option<String>,
    pub business_context: BusinessContext,
}

/// A freshly opened session with its first question.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStarted {
    pub session_id: AssessmentSessionId,
    pub question: Question,
    pub progress: AssessmentProgress,
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponseRequest {
    pub session_id: AssessmentSessionId,
    pub question_id: QuestionId,
    pub response_value: String,
    pub response_time_ms: u64,
}

/// Backend reaction to a submitted answer. `question == None` means the
/// assessment is complete and results can be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseOutcome {
    pub question: Option<Question>,
    pub progress: AssessmentProgress,
}

/// Remote assessment backend.
#[async_trait]
pub trait AssessmentClient: Send + Sync {
    /// Persists the completed intake record.
    async fn save_intake(&self, record: &IntakeRecord) -> Result<(), ClientError>;

    /// Opens a session and returns the first question.
    async fn start_session(
        &self,
        request: &StartSessionRequest,
    ) -> Result<SessionStarted, ClientError>;

    /// Submits one answer; returns the next question or completion.
    async fn submit_response(
        &self,
        request: &SubmitResponseRequest,
    ) -> Result<ResponseOutcome, ClientError>;

    /// Fetches the results document for a completed session.
    async fn fetch_results(
        &self,
        session_id: &AssessmentSessionId,
    ) -> Result<ResultsPayload, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_timeout_and_unavailable_select_fallback() {
        assert!(ClientError::connection("refused").is_connection_failure());
        assert!(ClientError::timeout(10).is_connection_failure());
        assert!(ClientError::unavailable(503).is_connection_failure());
    }

    #[test]
    fn backend_and_parse_do_not_select_fallback() {
        assert!(!ClientError::backend(422, "ungültig").is_connection_failure());
        assert!(!ClientError::parse("missing field").is_connection_failure());
    }

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ClientError::backend(422, "E-Mail bereits registriert");
        assert_eq!(err.backend_message(), Some("E-Mail bereits registriert"));
    }

    #[test]
    fn empty_backend_message_yields_none() {
        assert_eq!(ClientError::backend(400, "").backend_message(), None);
        assert_eq!(ClientError::connection("x").backend_message(), None);
    }
}
