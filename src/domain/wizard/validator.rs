//! Per-step validation of the profile draft.
//!
//! Pure functions producing a map of field name to user-facing message.
//! An empty map means the step passes. Messages are advisory German text;
//! callers key off the field name to highlight inputs, and off the error
//! kind to distinguish the funding-eligibility case from a missing answer.

use std::collections::BTreeMap;

use crate::domain::profile::{ProfileDraft, EMERGENCY_FUND_MAX_MONTHS, MIN_HOURS_PER_WEEK};

use super::WizardStep;

/// Field name → validation error for one step.
pub type ErrorMap = BTreeMap<String, FieldError>;

/// Classification of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required answer not given. Explicit zero counts as given.
    Missing,
    /// Answer present but below a funding-program eligibility floor.
    Eligibility,
    /// Answer present but outside its legal range.
    OutOfRange,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn missing(message: &str) -> Self {
        Self {
            kind: FieldErrorKind::Missing,
            message: message.to_string(),
        }
    }

    fn eligibility(message: &str) -> Self {
        Self {
            kind: FieldErrorKind::Eligibility,
            message: message.to_string(),
        }
    }

    fn out_of_range(message: String) -> Self {
        Self {
            kind: FieldErrorKind::OutOfRange,
            message,
        }
    }
}

/// Validates the answers required by one step.
///
/// Returns an empty map when the step passes. Only fields belonging to
/// the given step are checked.
pub fn validate_step(step: WizardStep, draft: &ProfileDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        WizardStep::Experience => {
            if draft.experience_years().is_none() {
                errors.insert(
                    "experience_years".to_string(),
                    FieldError::missing("Bitte Jahre Berufserfahrung angeben"),
                );
            }
            if draft.industry().is_none() {
                errors.insert(
                    "industry".to_string(),
                    FieldError::missing("Bitte Branche auswählen"),
                );
            }
        }
        WizardStep::Network => {
            if draft.network_strength().is_none() {
                errors.insert(
                    "network_strength".to_string(),
                    FieldError::missing("Bitte Netzwerk-Stärke angeben"),
                );
            }
        }
        WizardStep::Financial => {
            if draft.startup_capital_available().is_none() {
                errors.insert(
                    "startup_capital_available".to_string(),
                    FieldError::missing("Bitte Startkapital angeben"),
                );
            }
            if draft.emergency_fund_months() > EMERGENCY_FUND_MAX_MONTHS {
                errors.insert(
                    "emergency_fund_months".to_string(),
                    FieldError::out_of_range(format!(
                        "Notfall-Rücklage darf höchstens {} Monate betragen",
                        EMERGENCY_FUND_MAX_MONTHS
                    )),
                );
            }
        }
        WizardStep::Living => {
            if draft.family_status().is_none() {
                errors.insert(
                    "family_status".to_string(),
                    FieldError::missing("Bitte Familienstatus auswählen"),
                );
            }
        }
        WizardStep::Availability => match draft.hours_per_week_available() {
            None => {
                errors.insert(
                    "hours_per_week_available".to_string(),
                    FieldError::missing("Bitte Stunden pro Woche angeben"),
                );
            }
            Some(hours) if hours < MIN_HOURS_PER_WEEK => {
                errors.insert(
                    "hours_per_week_available".to_string(),
                    FieldError::eligibility(
                        "Mindestens 15h/Woche für Gründungszuschuss erforderlich!",
                    ),
                );
            }
            Some(_) => {}
        },
    }

    errors
}

/// Validates every step at once; used before final profile assembly.
pub fn validate_all(draft: &ProfileDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for step in WizardStep::ALL {
        errors.extend(validate_step(step, draft));
    }
    errors
}
