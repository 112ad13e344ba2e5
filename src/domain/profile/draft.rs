//! Partially collected founder profile.

use serde::{Deserialize, Serialize};

use super::{FamilyStatus, FounderProfile, Industry, NetworkStrength, PartTimeJobType};

/// Founder profile under collection.
///
/// Required selections stay `None` until the user answers them; counters
/// default to zero and flags to false. Setters enforce the dependent-field
/// rules so a draft never carries stale conditional values:
///
/// - partner income exists only while `family_status` has a partner
/// - living-reduction fields are zeroed when the reduction flag is unset
/// - part-time sub-fields are zeroed when the part-time flag is unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    experience_years: Option<u32>,
    industry: Option<Industry>,
    relevant_certifications: u32,
    previous_self_employment: bool,

    network_strength: Option<NetworkStrength>,
    first_customers_pipeline: u32,
    has_former_colleagues: bool,
    has_referral_partners: bool,

    startup_capital_available: Option<f64>,
    monthly_fixed_obligations: f64,
    emergency_fund_months: u8,

    family_status: Option<FamilyStatus>,
    partner_income_monthly: Option<f64>,
    can_reduce_living_costs: bool,
    living_reduction_months: u8,
    living_reduction_percent: u8,

    hours_per_week_available: Option<u32>,
    part_time_job_possible: bool,
    part_time_job_type: PartTimeJobType,
    part_time_hours_per_week: u32,
    part_time_income_monthly: f64,
    part_time_duration_months: u32,
}

impl ProfileDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Experience & qualification
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_experience_years(&mut self, years: u32) {
        self.experience_years = Some(years);
    }

    pub fn set_industry(&mut self, industry: Industry) {
        self.industry = Some(industry);
    }

    pub fn set_relevant_certifications(&mut self, count: u32) {
        self.relevant_certifications = count;
    }

    pub fn set_previous_self_employment(&mut self, value: bool) {
        self.previous_self_employment = value;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Network & customers
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_network_strength(&mut self, strength: NetworkStrength) {
        self.network_strength = Some(strength);
    }

    pub fn set_first_customers_pipeline(&mut self, count: u32) {
        self.first_customers_pipeline = count;
    }

    pub fn set_has_former_colleagues(&mut self, value: bool) {
        self.has_former_colleagues = value;
    }

    pub fn set_has_referral_partners(&mut self, value: bool) {
        self.has_referral_partners = value;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Financial situation
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_startup_capital_available(&mut self, amount: f64) {
        self.startup_capital_available = Some(amount.max(0.0));
    }

    pub fn set_monthly_fixed_obligations(&mut self, amount: f64) {
        self.monthly_fixed_obligations = amount.max(0.0);
    }

    pub fn set_emergency_fund_months(&mut self, months: u8) {
        self.emergency_fund_months = months;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Living situation
    // ─────────────────────────────────────────────────────────────────────

    /// Sets the family status. Switching to `Single` drops any previously
    /// captured partner income.
    pub fn set_family_status(&mut self, status: FamilyStatus) {
        if !status.has_partner() {
            self.partner_income_monthly = None;
        }
        self.family_status = Some(status);
    }

    /// Records partner income. Ignored while the family status has no
    /// partner (the field is not collected in that case).
    pub fn set_partner_income_monthly(&mut self, amount: Option<f64>) {
        if self.family_status.is_some_and(|s| s.has_partner()) {
            self.partner_income_monthly = amount.map(|a| a.max(0.0));
        }
    }

    /// Toggles the living-cost reduction flag, zeroing the dependent
    /// fields when unset.
    pub fn set_can_reduce_living_costs(&mut self, value: bool) {
        self.can_reduce_living_costs = value;
        if !value {
            self.living_reduction_months = 0;
            self.living_reduction_percent = 0;
        }
    }

    pub fn set_living_reduction_months(&mut self, months: u8) {
        if self.can_reduce_living_costs {
            self.living_reduction_months = months;
        }
    }

    pub fn set_living_reduction_percent(&mut self, percent: u8) {
        if self.can_reduce_living_costs {
            self.living_reduction_percent = percent;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Availability
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_hours_per_week_available(&mut self, hours: u32) {
        self.hours_per_week_available = Some(hours);
    }

    /// Toggles the part-time flag, zeroing all part-time sub-fields when
    /// unset.
    pub fn set_part_time_job_possible(&mut self, value: bool) {
        self.part_time_job_possible = value;
        if !value {
            self.part_time_job_type = PartTimeJobType::None;
            self.part_time_hours_per_week = 0;
            self.part_time_income_monthly = 0.0;
            self.part_time_duration_months = 0;
        }
    }

    pub fn set_part_time_job_type(&mut self, job_type: PartTimeJobType) {
        if self.part_time_job_possible {
            self.part_time_job_type = job_type;
        }
    }

    pub fn set_part_time_hours_per_week(&mut self, hours: u32) {
        if self.part_time_job_possible {
            self.part_time_hours_per_week = hours;
        }
    }

    pub fn set_part_time_income_monthly(&mut self, amount: f64) {
        if self.part_time_job_possible {
            self.part_time_income_monthly = amount.max(0.0);
        }
    }

    pub fn set_part_time_duration_months(&mut self, months: u32) {
        if self.part_time_job_possible {
            self.part_time_duration_months = months;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn experience_years(&self) -> Option<u32> {
        self.experience_years
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn relevant_certifications(&self) -> u32 {
        self.relevant_certifications
    }

    pub fn previous_self_employment(&self) -> bool {
        self.previous_self_employment
    }

    pub fn network_strength(&self) -> Option<NetworkStrength> {
        self.network_strength
    }

    pub fn first_customers_pipeline(&self) -> u32 {
        self.first_customers_pipeline
    }

    pub fn has_former_colleagues(&self) -> bool {
        self.has_former_colleagues
    }

    pub fn has_referral_partners(&self) -> bool {
        self.has_referral_partners
    }

    pub fn startup_capital_available(&self) -> Option<f64> {
        self.startup_capital_available
    }

    pub fn monthly_fixed_obligations(&self) -> f64 {
        self.monthly_fixed_obligations
    }

    pub fn emergency_fund_months(&self) -> u8 {
        self.emergency_fund_months
    }

    pub fn family_status(&self) -> Option<FamilyStatus> {
        self.family_status
    }

    pub fn partner_income_monthly(&self) -> Option<f64> {
        self.partner_income_monthly
    }

    pub fn can_reduce_living_costs(&self) -> bool {
        self.can_reduce_living_costs
    }

    pub fn living_reduction_months(&self) -> u8 {
        self.living_reduction_months
    }

    pub fn living_reduction_percent(&self) -> u8 {
        self.living_reduction_percent
    }

    pub fn hours_per_week_available(&self) -> Option<u32> {
        self.hours_per_week_available
    }

    pub fn part_time_job_possible(&self) -> bool {
        self.part_time_job_possible
    }

    pub fn part_time_job_type(&self) -> PartTimeJobType {
        self.part_time_job_type
    }

    pub fn part_time_hours_per_week(&self) -> u32 {
        self.part_time_hours_per_week
    }

    pub fn part_time_income_monthly(&self) -> f64 {
        self.part_time_income_monthly
    }

    pub fn part_time_duration_months(&self) -> u32 {
        self.part_time_duration_months
    }

    /// Assembles the complete profile if every required selection is
    /// present. Validation beyond presence is the step validator's job.
    pub fn assemble(&self) -> Option<FounderProfile> {
        Some(FounderProfile {
            experience_years: self.experience_years?,
            industry: self.industry?,
            relevant_certifications: self.relevant_certifications,
            previous_self_employment: self.previous_self_employment,
            network_strength: self.network_strength?,
            first_customers_pipeline: self.first_customers_pipeline,
            has_former_colleagues: self.has_former_colleagues,
            has_referral_partners: self.has_referral_partners,
            startup_capital_available: self.startup_capital_available?,
            monthly_fixed_obligations: self.monthly_fixed_obligations,
            emergency_fund_months: self.emergency_fund_months,
            family_status: self.family_status?,
            partner_income_monthly: self.partner_income_monthly,
            can_reduce_living_costs: self.can_reduce_living_costs,
            living_reduction_months: self.living_reduction_months,
            living_reduction_percent: self.living_reduction_percent,
            hours_per_week_available: self.hours_per_week_available?,
            part_time_job_possible: self.part_time_job_possible,
            part_time_job_type: self.part_time_job_type,
            part_time_hours_per_week: self.part_time_hours_per_week,
            part_time_income_monthly: self.part_time_income_monthly,
            part_time_duration_months: self.part_time_duration_months,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new();
        draft.set_experience_years(10);
        draft.set_industry(Industry::Software);
        draft.set_network_strength(NetworkStrength::Strong);
        draft.set_startup_capital_available(20_000.0);
        draft.set_family_status(FamilyStatus::Single);
        draft.set_hours_per_week_available(40);
        draft
    }

    #[test]
    fn new_draft_has_no_required_selections() {
        let draft = ProfileDraft::new();
        assert!(draft.experience_years().is_none());
        assert!(draft.industry().is_none());
        assert!(draft.network_strength().is_none());
        assert!(draft.startup_capital_available().is_none());
        assert!(draft.family_status().is_none());
        assert!(draft.hours_per_week_available().is_none());
    }

    #[test]
    fn explicit_zero_experience_is_present() {
        let mut draft = ProfileDraft::new();
        draft.set_experience_years(0);
        assert_eq!(draft.experience_years(), Some(0));
    }

    #[test]
    fn switching_to_single_drops_partner_income() {
        let mut draft = ProfileDraft::new();
        draft.set_family_status(FamilyStatus::Partnerschaft);
        draft.set_partner_income_monthly(Some(2_000.0));
        assert_eq!(draft.partner_income_monthly(), Some(2_000.0));

        draft.set_family_status(FamilyStatus::Single);
        assert!(draft.partner_income_monthly().is_none());
    }

    #[test]
    fn partner_income_ignored_without_partner() {
        let mut draft = ProfileDraft::new();
        draft.set_family_status(FamilyStatus::Single);
        draft.set_partner_income_monthly(Some(2_000.0));
        assert!(draft.partner_income_monthly().is_none());
    }

    #[test]
    fn unsetting_part_time_flag_zeroes_sub_fields() {
        let mut draft = ProfileDraft::new();
        draft.set_part_time_job_possible(true);
        draft.set_part_time_job_type(PartTimeJobType::Minijob);
        draft.set_part_time_hours_per_week(12);
        draft.set_part_time_income_monthly(800.0);
        draft.set_part_time_duration_months(6);

        draft.set_part_time_job_possible(false);
        assert_eq!(draft.part_time_job_type(), PartTimeJobType::None);
        assert_eq!(draft.part_time_hours_per_week(), 0);
        assert_eq!(draft.part_time_income_monthly(), 0.0);
        assert_eq!(draft.part_time_duration_months(), 0);
    }

    #[test]
    fn part_time_sub_fields_ignored_while_flag_unset() {
        let mut draft = ProfileDraft::new();
        draft.set_part_time_hours_per_week(12);
        draft.set_part_time_income_monthly(800.0);
        assert_eq!(draft.part_time_hours_per_week(), 0);
        assert_eq!(draft.part_time_income_monthly(), 0.0);
    }

    #[test]
    fn unsetting_reduction_flag_zeroes_sub_fields() {
        let mut draft = ProfileDraft::new();
        draft.set_can_reduce_living_costs(true);
        draft.set_living_reduction_months(6);
        draft.set_living_reduction_percent(25);

        draft.set_can_reduce_living_costs(false);
        assert_eq!(draft.living_reduction_months(), 0);
        assert_eq!(draft.living_reduction_percent(), 0);
    }

    #[test]
    fn negative_capital_is_floored_at_zero() {
        let mut draft = ProfileDraft::new();
        draft.set_startup_capital_available(-500.0);
        assert_eq!(draft.startup_capital_available(), Some(0.0));
    }

    #[test]
    fn assemble_fails_while_required_selection_missing() {
        let mut draft = filled_draft();
        assert!(draft.assemble().is_some());

        draft = filled_draft();
        draft.industry = None;
        assert!(draft.assemble().is_none());
    }

    #[test]
    fn assemble_carries_all_answers() {
        let mut draft = filled_draft();
        draft.set_relevant_certifications(2);
        draft.set_previous_self_employment(true);
        draft.set_first_customers_pipeline(4);
        draft.set_has_former_colleagues(true);

        let profile = draft.assemble().unwrap();
        assert_eq!(profile.experience_years, 10);
        assert_eq!(profile.industry, Industry::Software);
        assert_eq!(profile.relevant_certifications, 2);
        assert!(profile.previous_self_employment);
        assert_eq!(profile.first_customers_pipeline, 4);
        assert!(profile.has_former_colleagues);
    }
}
