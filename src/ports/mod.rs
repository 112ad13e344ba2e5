//! Outbound ports: traits the application layer depends on, implemented
//! by adapters.

mod assessment_client;

pub use assessment_client::{
    AssessmentClient, ClientError, IntakeRecord, ResponseOutcome, SessionStarted,
    StartSessionRequest, SubmitResponseRequest,
};
