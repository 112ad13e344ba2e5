//! Assessment sub-flow types: stage lifecycle, scenario questions,
//! progress, and the results payload.

mod question;
mod results;
mod stage;

pub use question::{AnswerOption, AssessmentProgress, MicroInsight, Question};
pub use results::{DimensionScore, GapAnalysis, PersonalityProfile, PriorityGap, ResultsPayload};
pub use stage::AssessmentStage;
