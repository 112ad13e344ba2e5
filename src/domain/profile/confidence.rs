//! Founder confidence heuristic.
//!
//! Weighted point sum over the profile answers. The weights are product
//! constants; the maximum attainable sum is exactly 100
//! (30 + 25 + 20 + 10 + 10 + 5), so the final clamp only matters for
//! pathological inputs.

use crate::domain::foundation::ConfidenceScore;

use super::{FounderProfile, NetworkStrength, ProfileDraft};

/// Computes the readiness score for a complete profile.
pub fn score(profile: &FounderProfile) -> ConfidenceScore {
    let points = experience_points(profile.experience_years)
        + network_points(Some(profile.network_strength))
        + pipeline_points(profile.first_customers_pipeline)
        + self_employment_points(profile.previous_self_employment)
        + certification_points(profile.relevant_certifications)
        + colleague_points(profile.has_former_colleagues);

    ConfidenceScore::new(points)
}

/// Computes the readiness score for a draft, treating unanswered fields
/// as their zero-contribution branch. Used for live preview while the
/// wizard is still in progress.
pub fn score_draft(draft: &ProfileDraft) -> ConfidenceScore {
    let points = experience_points(draft.experience_years().unwrap_or(0))
        + network_points(draft.network_strength())
        + pipeline_points(draft.first_customers_pipeline())
        + self_employment_points(draft.previous_self_employment())
        + certification_points(draft.relevant_certifications())
        + colleague_points(draft.has_former_colleagues());

    ConfidenceScore::new(points)
}

/// Experience contribution, 0-30 points.
fn experience_points(years: u32) -> u32 {
    if years >= 10 {
        30
    } else if years >= 5 {
        25
    } else if years >= 2 {
        15
    } else if years >= 1 {
        5
    } else {
        0
    }
}

/// Network contribution, 0-25 points.
fn network_points(strength: Option<NetworkStrength>) -> u32 {
    match strength {
        Some(NetworkStrength::Strong) => 25,
        Some(NetworkStrength::Medium) => 15,
        Some(NetworkStrength::Weak) => 5,
        Some(NetworkStrength::None) | None => 0,
    }
}

/// Customer pipeline contribution, 5 points per prospect, capped at 20.
fn pipeline_points(pipeline: u32) -> u32 {
    (pipeline.saturating_mul(5)).min(20)
}

/// Prior self-employment contribution, 0 or 10 points.
fn self_employment_points(previous: bool) -> u32 {
    if previous {
        10
    } else {
        0
    }
}

/// Certification contribution, 3 points per certificate, capped at 10.
fn certification_points(count: u32) -> u32 {
    (count.saturating_mul(3)).min(10)
}

/// Former-colleague contribution, 0 or 5 points.
fn colleague_points(has_colleagues: bool) -> u32 {
    if has_colleagues {
        5
    } else {
        0
    }
}
