//! Founder-profile wizard.
//!
//! Five linear steps with per-step validation gating forward navigation.
//! The sequencer and validator are pure functions; [`WizardState`] ties
//! them together and owns the collected answers.

mod state;
mod step;
mod validator;

pub use state::{AdvanceOutcome, CompletedIntake, RetreatOutcome, WizardState};
pub use step::{Advance, Retreat, WizardStep};
pub use validator::{validate_all, validate_step, ErrorMap, FieldError, FieldErrorKind};
