//! Complete founder profile record.

use serde::{Deserialize, Serialize};

use super::{FamilyStatus, Industry, NetworkStrength, PartTimeJobType};

/// Minimum weekly hours required for the Gründungszuschuss funding program.
///
/// This is an eligibility floor imposed by the funding rules, not a soft
/// recommendation; values below it block wizard completion.
pub const MIN_HOURS_PER_WEEK: u32 = 15;

/// Maximum number of months of living costs counted as emergency fund.
pub const EMERGENCY_FUND_MAX_MONTHS: u8 = 24;

/// Structured intake record describing a prospective founder.
///
/// Produced by the wizard once every step has validated; all dependent
/// fields are consistent with their governing flags by construction
/// (see `ProfileDraft`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderProfile {
    // Experience & qualification
    pub experience_years: u32,
    pub industry: Industry,
    pub relevant_certifications: u32,
    pub previous_self_employment: bool,

    // Network & customers
    pub network_strength: NetworkStrength,
    pub first_customers_pipeline: u32,
    pub has_former_colleagues: bool,
    pub has_referral_partners: bool,

    // Financial situation
    pub startup_capital_available: f64,
    pub monthly_fixed_obligations: f64,
    pub emergency_fund_months: u8,

    // Living situation
    pub family_status: FamilyStatus,
    pub partner_income_monthly: Option<f64>,
    pub can_reduce_living_costs: bool,
    pub living_reduction_months: u8,
    pub living_reduction_percent: u8,

    // Availability
    pub hours_per_week_available: u32,
    pub part_time_job_possible: bool,
    pub part_time_job_type: PartTimeJobType,
    pub part_time_hours_per_week: u32,
    pub part_time_income_monthly: f64,
    pub part_time_duration_months: u32,
}

impl FounderProfile {
    /// Returns true when the profile meets the funding program's hours floor.
    pub fn meets_hours_floor(&self) -> bool {
        self.hours_per_week_available >= MIN_HOURS_PER_WEEK
    }

    /// Total bridging income from a part-time job over its planned duration.
    pub fn part_time_total_income(&self) -> f64 {
        self.part_time_income_monthly * f64::from(self.part_time_duration_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> FounderProfile {
        FounderProfile {
            experience_years: 8,
            industry: Industry::Consulting,
            relevant_certifications: 1,
            previous_self_employment: false,
            network_strength: NetworkStrength::Medium,
            first_customers_pipeline: 2,
            has_former_colleagues: true,
            has_referral_partners: false,
            startup_capital_available: 15_000.0,
            monthly_fixed_obligations: 900.0,
            emergency_fund_months: 3,
            family_status: FamilyStatus::Partnerschaft,
            partner_income_monthly: Some(2_400.0),
            can_reduce_living_costs: false,
            living_reduction_months: 0,
            living_reduction_percent: 0,
            hours_per_week_available: 40,
            part_time_job_possible: true,
            part_time_job_type: PartTimeJobType::Freelance,
            part_time_hours_per_week: 10,
            part_time_income_monthly: 1_200.0,
            part_time_duration_months: 6,
        }
    }

    #[test]
    fn meets_hours_floor_at_boundary() {
        let mut profile = sample_profile();
        profile.hours_per_week_available = 15;
        assert!(profile.meets_hours_floor());
        profile.hours_per_week_available = 14;
        assert!(!profile.meets_hours_floor());
    }

    #[test]
    fn part_time_total_income_multiplies_over_duration() {
        let profile = sample_profile();
        assert_eq!(profile.part_time_total_income(), 7_200.0);
    }

    #[test]
    fn serializes_with_snake_case_wire_names() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(json["experience_years"], 8);
        assert_eq!(json["industry"], "consulting");
        assert_eq!(json["family_status"], "partnerschaft");
        assert_eq!(json["part_time_job_type"], "freelance");
    }

    #[test]
    fn round_trips_through_json() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: FounderProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
