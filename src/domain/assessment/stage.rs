//! Lifecycle of one assessment session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Stages of the scenario assessment, in strict order. No stage may be
/// skipped; `Complete` is entered the moment a response carries no next
/// question, and results loading is a separate step so a failed fetch can
/// be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    NotStarted,
    InProgress,
    Complete,
    ResultsLoaded,
}

impl StateMachine for AssessmentStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStage::*;
        matches!(
            (self, target),
            (NotStarted, InProgress) | (InProgress, Complete) | (Complete, ResultsLoaded)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStage::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Complete],
            Complete => vec![ResultsLoaded],
            ResultsLoaded => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_strictly_in_order() {
        let stage = AssessmentStage::NotStarted;
        let stage = stage.transition_to(AssessmentStage::InProgress).unwrap();
        let stage = stage.transition_to(AssessmentStage::Complete).unwrap();
        let stage = stage.transition_to(AssessmentStage::ResultsLoaded).unwrap();
        assert!(stage.is_terminal());
    }

    #[test]
    fn skipping_a_stage_is_rejected() {
        assert!(AssessmentStage::NotStarted
            .transition_to(AssessmentStage::Complete)
            .is_err());
        assert!(AssessmentStage::InProgress
            .transition_to(AssessmentStage::ResultsLoaded)
            .is_err());
    }

    #[test]
    fn moving_backward_is_rejected() {
        assert!(AssessmentStage::Complete
            .transition_to(AssessmentStage::InProgress)
            .is_err());
    }

    #[test]
    fn only_results_loaded_is_terminal() {
        assert!(AssessmentStage::ResultsLoaded.is_terminal());
        assert!(!AssessmentStage::Complete.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&AssessmentStage::ResultsLoaded).unwrap(),
            "\"results_loaded\""
        );
    }
}
