//! Application layer: orchestration over the domain and ports.

mod assessment_runner;

pub use assessment_runner::{AssessmentRunner, StartOutcome, SubmitOutcome};
