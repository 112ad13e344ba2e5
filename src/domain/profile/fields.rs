//! Enumerated founder profile fields.
//!
//! Wire values match the backend's snake_case vocabulary, including the
//! German terms the product uses for family status and job types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business sector the founder intends to start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Consulting,
    Coaching,
    Handwerk,
    Einzelhandel,
    Online,
    Freiberufler,
    Gastronomie,
    Dienstleistung,
    Software,
    Ecommerce,
}

impl Industry {
    /// All selectable industries, in presentation order.
    pub fn all() -> [Industry; 10] {
        use Industry::*;
        [
            Consulting,
            Coaching,
            Handwerk,
            Dienstleistung,
            Freiberufler,
            Software,
            Online,
            Ecommerce,
            Einzelhandel,
            Gastronomie,
        ]
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Industry::Consulting => "consulting",
            Industry::Coaching => "coaching",
            Industry::Handwerk => "handwerk",
            Industry::Einzelhandel => "einzelhandel",
            Industry::Online => "online",
            Industry::Freiberufler => "freiberufler",
            Industry::Gastronomie => "gastronomie",
            Industry::Dienstleistung => "dienstleistung",
            Industry::Software => "software",
            Industry::Ecommerce => "ecommerce",
        };
        write!(f, "{}", s)
    }
}

/// Self-assessed strength of the founder's professional network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStrength {
    None,
    Weak,
    Medium,
    Strong,
}

/// Family situation, which gates the partner-income field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStatus {
    Single,
    Partnerschaft,
    #[serde(rename = "familie_1_kind")]
    Familie1Kind,
    #[serde(rename = "familie_2_kinder")]
    Familie2Kinder,
    #[serde(rename = "familie_3plus_kinder")]
    Familie3PlusKinder,
}

impl FamilyStatus {
    /// Returns true when a partner income can exist for this status.
    pub fn has_partner(&self) -> bool {
        !matches!(self, FamilyStatus::Single)
    }
}

/// Kind of bridging part-time job, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartTimeJobType {
    #[default]
    None,
    Anstellung,
    Freelance,
    Minijob,
}
