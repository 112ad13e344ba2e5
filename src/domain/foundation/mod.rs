//! Shared domain primitives.
//!
//! Value objects, identifiers, and error types used across the intake
//! domain. Everything here is small, immutable, and free of I/O.

mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentSessionId, IntakeId, QuestionId};
pub use score::ConfidenceScore;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
