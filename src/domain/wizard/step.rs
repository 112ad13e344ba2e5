//! Wizard step enumeration and sequencing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five profile collection steps, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Experience,
    Network,
    Financial,
    Living,
    Availability,
}

/// Result of a forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moves to the given step.
    Next(WizardStep),
    /// The terminal step was submitted; the wizard is complete.
    Complete,
}

/// Result of a backward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// The wizard moves back to the given step.
    Previous(WizardStep),
    /// Already on the first step; the caller may delegate to its cancel
    /// handler.
    AtStart,
}

impl WizardStep {
    /// All steps in presentation order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Experience,
        WizardStep::Network,
        WizardStep::Financial,
        WizardStep::Living,
        WizardStep::Availability,
    ];

    /// The step the wizard opens on.
    pub fn first() -> Self {
        WizardStep::Experience
    }

    /// Zero-based position within the flow.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Experience => 0,
            WizardStep::Network => 1,
            WizardStep::Financial => 2,
            WizardStep::Living => 3,
            WizardStep::Availability => 4,
        }
    }

    /// Returns true for the terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Availability)
    }

    /// Next step on a forward move. Unconditional; validation gating is
    /// the caller's responsibility.
    pub fn forward(&self) -> Advance {
        match self {
            WizardStep::Experience => Advance::Next(WizardStep::Network),
            WizardStep::Network => Advance::Next(WizardStep::Financial),
            WizardStep::Financial => Advance::Next(WizardStep::Living),
            WizardStep::Living => Advance::Next(WizardStep::Availability),
            WizardStep::Availability => Advance::Complete,
        }
    }

    /// Previous step on a backward move.
    pub fn backward(&self) -> Retreat {
        match self {
            WizardStep::Experience => Retreat::AtStart,
            WizardStep::Network => Retreat::Previous(WizardStep::Experience),
            WizardStep::Financial => Retreat::Previous(WizardStep::Network),
            WizardStep::Living => Retreat::Previous(WizardStep::Financial),
            WizardStep::Availability => Retreat::Previous(WizardStep::Living),
        }
    }

    /// Step heading shown to the user.
    pub fn title_de(&self) -> &'static str {
        match self {
            WizardStep::Experience => "Erfahrung & Qualifikation",
            WizardStep::Network => "Netzwerk & Kunden",
            WizardStep::Financial => "Finanzielle Situation",
            WizardStep::Living => "Lebensumstände",
            WizardStep::Availability => "Verfügbarkeit & Teilzeit",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Experience => "experience",
            WizardStep::Network => "network",
            WizardStep::Financial => "financial",
            WizardStep::Living => "living",
            WizardStep::Availability => "availability",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_walks_the_fixed_order() {
        assert_eq!(
            WizardStep::Experience.forward(),
            Advance::Next(WizardStep::Network)
        );
        assert_eq!(
            WizardStep::Network.forward(),
            Advance::Next(WizardStep::Financial)
        );
        assert_eq!(
            WizardStep::Financial.forward(),
            Advance::Next(WizardStep::Living)
        );
        assert_eq!(
            WizardStep::Living.forward(),
            Advance::Next(WizardStep::Availability)
        );
    }

    #[test]
    fn terminal_forward_signals_completion() {
        assert_eq!(WizardStep::Availability.forward(), Advance::Complete);
    }

    #[test]
    fn five_forward_moves_complete_exactly_on_the_fifth() {
        let mut step = WizardStep::first();
        for call in 1..=5 {
            match step.forward() {
                Advance::Next(next) => {
                    assert!(call < 5, "completed too early on call {}", call);
                    step = next;
                }
                Advance::Complete => {
                    assert_eq!(call, 5, "completed on call {} instead of 5", call);
                }
            }
        }
    }

    #[test]
    fn backward_from_first_reports_at_start() {
        assert_eq!(WizardStep::Experience.backward(), Retreat::AtStart);
    }

    #[test]
    fn backward_inverts_forward() {
        for step in WizardStep::ALL {
            if let Advance::Next(next) = step.forward() {
                assert_eq!(next.backward(), Retreat::Previous(step));
            }
        }
    }

    #[test]
    fn index_matches_presentation_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn only_availability_is_terminal() {
        for step in WizardStep::ALL {
            assert_eq!(step.is_terminal(), step == WizardStep::Availability);
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&WizardStep::Availability).unwrap(),
            "\"availability\""
        );
    }
}
