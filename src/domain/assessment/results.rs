//! Results payload returned when the assessment completes.
//!
//! Consumed for display only; the core never re-derives these values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Founder archetype with its narrative framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub archetype_id: String,
    pub archetype_name: String,
    pub tagline: String,
    pub description: String,
    pub primary_strengths: Vec<String>,
    pub primary_challenges: Vec<String>,
    /// Predicted Gründungszuschuss success, 0-100.
    pub gz_success_prediction: u8,
}

/// Score on one hidden assessment dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub theta: f64,
    pub percentile: u8,
    pub label: String,
}

/// A dimension the founder should develop before applying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityGap {
    pub dimension: String,
    pub current_percentile: u8,
    pub target_percentile: u8,
    pub urgency: String,
}

/// Aggregated readiness view across all dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub priority_gaps: Vec<PriorityGap>,
    pub overall_readiness: u8,
}

/// The full results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub personality_profile: PersonalityProfile,
    #[serde(default)]
    pub dimension_scores: BTreeMap<String, DimensionScore>,
    pub gap_analysis: GapAnalysis,
}
