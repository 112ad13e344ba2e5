//! Wizard state: current step, collected answers, validation errors.

use crate::domain::foundation::{ConfidenceScore, DomainError, ErrorCode};
use crate::domain::profile::{confidence, FounderProfile, ProfileDraft};

use super::{validate_all, validate_step, Advance, ErrorMap, Retreat, WizardStep};

/// Payload handed to the caller when the terminal step succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedIntake {
    pub profile: FounderProfile,
    pub confidence: ConfidenceScore,
}

/// Result of a forward submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Validation failed; the errors are recorded on the state.
    Rejected,
    /// Moved to the given step.
    Moved(WizardStep),
    /// Terminal step passed; the wizard is finished and the state should
    /// be discarded.
    Completed(CompletedIntake),
}

/// Result of a backward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    /// Moved back to the given step.
    Moved(WizardStep),
    /// Already on the first step; the caller decides whether this cancels
    /// the wizard.
    AtStart,
}

/// Mutable state of one wizard run.
///
/// Created empty at mount, mutated by each step's continue/back action,
/// and consumed when the terminal step completes.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    current_step: Option<WizardStep>,
    answers: ProfileDraft,
    errors: ErrorMap,
    is_submitting: bool,
}

impl WizardState {
    /// Creates a fresh wizard positioned on the first step.
    pub fn new() -> Self {
        Self {
            current_step: Some(WizardStep::first()),
            answers: ProfileDraft::new(),
            errors: ErrorMap::new(),
            is_submitting: false,
        }
    }

    /// The step currently shown. `None` only for a defaulted state that
    /// was never started.
    pub fn current_step(&self) -> WizardStep {
        self.current_step.unwrap_or_else(WizardStep::first)
    }

    /// Collected answers so far.
    pub fn answers(&self) -> &ProfileDraft {
        &self.answers
    }

    /// Current validation errors, keyed by field name.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// True while a remote submission for this wizard is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Live confidence preview over the answers given so far.
    pub fn confidence_preview(&self) -> ConfidenceScore {
        confidence::score_draft(&self.answers)
    }

    /// Mutable access to the draft for fields that carry no step-level
    /// validation. Validated fields should go through the typed setters
    /// below so their error entry is cleared on edit.
    pub fn answers_mut(&mut self) -> &mut ProfileDraft {
        &mut self.answers
    }

    /// Applies an edit to the draft and clears the named field's error,
    /// mirroring the product's behavior of removing an error as soon as
    /// the user touches the field.
    pub fn edit_field(&mut self, field: &str, apply: impl FnOnce(&mut ProfileDraft)) {
        apply(&mut self.answers);
        self.errors.remove(field);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Validates the current step and moves forward on success.
    ///
    /// On the terminal step, a full-draft validation runs before assembly
    /// so a profile can never be produced with earlier answers missing.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let step = self.current_step();

        let errors = validate_step(step, &self.answers);
        if !errors.is_empty() {
            self.errors = errors;
            return AdvanceOutcome::Rejected;
        }

        match step.forward() {
            Advance::Next(next) => {
                self.errors.clear();
                self.current_step = Some(next);
                AdvanceOutcome::Moved(next)
            }
            Advance::Complete => {
                let all_errors = validate_all(&self.answers);
                if !all_errors.is_empty() {
                    self.errors = all_errors;
                    return AdvanceOutcome::Rejected;
                }
                match self.answers.assemble() {
                    Some(profile) => {
                        let confidence = confidence::score(&profile);
                        self.errors.clear();
                        AdvanceOutcome::Completed(CompletedIntake { profile, confidence })
                    }
                    // Unreachable when validate_all passed; kept as a
                    // rejection rather than a panic.
                    None => AdvanceOutcome::Rejected,
                }
            }
        }
    }

    /// Moves backward one step. Answers and errors are retained so the
    /// user can revisit earlier input.
    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.current_step().backward() {
            Retreat::Previous(previous) => {
                self.current_step = Some(previous);
                RetreatOutcome::Moved(previous)
            }
            Retreat::AtStart => RetreatOutcome::AtStart,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Submission gating
    // ─────────────────────────────────────────────────────────────────────

    /// Marks a remote submission as in flight.
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` if one is already pending
    pub fn begin_submission(&mut self) -> Result<(), DomainError> {
        if self.is_submitting {
            return Err(DomainError::new(
                ErrorCode::SubmissionInFlight,
                "A submission is already in flight for this wizard",
            ));
        }
        self.is_submitting = true;
        Ok(())
    }

    /// Clears the in-flight flag once the submission settled.
    pub fn end_submission(&mut self) {
        self.is_submitting = false;
    }

    /// Explicit "try again": drops all answers, errors, and flags.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{FamilyStatus, Industry, NetworkStrength};
    use crate::domain::wizard::FieldErrorKind;

    fn fill_step(state: &mut WizardState, step: WizardStep) {
        match step {
            WizardStep::Experience => {
                state.edit_field("experience_years", |d| d.set_experience_years(10));
                state.edit_field("industry", |d| d.set_industry(Industry::Software));
            }
            WizardStep::Network => {
                state.edit_field("network_strength", |d| {
                    d.set_network_strength(NetworkStrength::Strong)
                });
            }
            WizardStep::Financial => {
                state.edit_field("startup_capital_available", |d| {
                    d.set_startup_capital_available(25_000.0)
                });
            }
            WizardStep::Living => {
                state.edit_field("family_status", |d| {
                    d.set_family_status(FamilyStatus::Single)
                });
            }
            WizardStep::Availability => {
                state.edit_field("hours_per_week_available", |d| {
                    d.set_hours_per_week_available(40)
                });
            }
        }
    }

    fn walk_to_completion(state: &mut WizardState) -> CompletedIntake {
        loop {
            fill_step(state, state.current_step());
            match state.advance() {
                AdvanceOutcome::Moved(_) => continue,
                AdvanceOutcome::Completed(done) => return done,
                AdvanceOutcome::Rejected => {
                    panic!("unexpected rejection: {:?}", state.errors())
                }
            }
        }
    }

    #[test]
    fn new_wizard_starts_on_experience_with_no_errors() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), WizardStep::Experience);
        assert!(state.errors().is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn advance_rejects_and_records_errors_when_step_invalid() {
        let mut state = WizardState::new();
        let outcome = state.advance();
        assert_eq!(outcome, AdvanceOutcome::Rejected);
        assert!(state.errors().contains_key("experience_years"));
        assert!(state.errors().contains_key("industry"));
        assert_eq!(state.current_step(), WizardStep::Experience);
    }

    #[test]
    fn advance_moves_forward_when_step_valid() {
        let mut state = WizardState::new();
        fill_step(&mut state, WizardStep::Experience);
        assert_eq!(state.advance(), AdvanceOutcome::Moved(WizardStep::Network));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn full_walk_completes_with_scored_profile() {
        let mut state = WizardState::new();
        let done = walk_to_completion(&mut state);
        assert_eq!(done.profile.experience_years, 10);
        // 30 (experience) + 25 (network) is all this walk sets
        assert_eq!(done.confidence.value(), 55);
    }

    #[test]
    fn completion_happens_exactly_on_the_fifth_advance() {
        let mut state = WizardState::new();
        let mut advances = 0;
        loop {
            let step = state.current_step();
            fill_step(&mut state, step);
            advances += 1;
            match state.advance() {
                AdvanceOutcome::Moved(_) => assert!(advances < 5),
                AdvanceOutcome::Completed(_) => {
                    assert_eq!(advances, 5);
                    break;
                }
                AdvanceOutcome::Rejected => panic!("unexpected rejection"),
            }
        }
    }

    #[test]
    fn eligibility_floor_blocks_completion() {
        let mut state = WizardState::new();
        for _ in 0..4 {
            let step = state.current_step();
            fill_step(&mut state, step);
            state.advance();
        }
        state.edit_field("hours_per_week_available", |d| {
            d.set_hours_per_week_available(14)
        });
        assert_eq!(state.advance(), AdvanceOutcome::Rejected);
        assert_eq!(
            state.errors()["hours_per_week_available"].kind,
            FieldErrorKind::Eligibility
        );
    }

    #[test]
    fn edit_field_clears_that_fields_error() {
        let mut state = WizardState::new();
        state.advance();
        assert!(state.errors().contains_key("industry"));

        state.edit_field("industry", |d| d.set_industry(Industry::Handwerk));
        assert!(!state.errors().contains_key("industry"));
        // The other error stays until its field is edited.
        assert!(state.errors().contains_key("experience_years"));
    }

    #[test]
    fn retreat_from_first_step_reports_at_start() {
        let mut state = WizardState::new();
        assert_eq!(state.retreat(), RetreatOutcome::AtStart);
        assert_eq!(state.current_step(), WizardStep::Experience);
    }

    #[test]
    fn retreat_preserves_answers() {
        let mut state = WizardState::new();
        fill_step(&mut state, WizardStep::Experience);
        state.advance();
        assert_eq!(
            state.retreat(),
            RetreatOutcome::Moved(WizardStep::Experience)
        );
        assert_eq!(state.answers().experience_years(), Some(10));
    }

    #[test]
    fn begin_submission_rejects_second_attempt() {
        let mut state = WizardState::new();
        state.begin_submission().unwrap();
        let err = state.begin_submission().unwrap_err();
        assert_eq!(err.code, ErrorCode::SubmissionInFlight);

        state.end_submission();
        assert!(state.begin_submission().is_ok());
    }

    #[test]
    fn reset_returns_to_a_fresh_wizard() {
        let mut state = WizardState::new();
        fill_step(&mut state, WizardStep::Experience);
        state.advance();
        state.begin_submission().unwrap();

        state.reset();
        assert_eq!(state.current_step(), WizardStep::Experience);
        assert!(state.answers().experience_years().is_none());
        assert!(state.errors().is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn confidence_preview_tracks_partial_answers() {
        let mut state = WizardState::new();
        assert_eq!(state.confidence_preview().value(), 0);
        fill_step(&mut state, WizardStep::Experience);
        assert_eq!(state.confidence_preview().value(), 30);
    }
}
