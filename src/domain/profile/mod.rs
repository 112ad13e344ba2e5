//! Founder profile domain.
//!
//! The profile is collected incrementally across the wizard steps as a
//! [`ProfileDraft`] and handed off as a complete [`FounderProfile`] once
//! every step validates. The confidence heuristic in [`confidence`] derives
//! a 0-100 readiness score from the answers.

pub mod confidence;
mod draft;
mod fields;
mod profile;

pub use draft::ProfileDraft;
pub use fields::{FamilyStatus, Industry, NetworkStrength, PartTimeJobType};
pub use profile::{FounderProfile, EMERGENCY_FUND_MAX_MONTHS, MIN_HOURS_PER_WEEK};
