//! End-to-end wizard walks through the public API.

use gruender_ai_core::domain::intake::{
    BusinessCategory, BusinessContext, BusinessStage, ContactDetails, TargetCustomer,
};
use gruender_ai_core::domain::profile::{FamilyStatus, Industry, NetworkStrength};
use gruender_ai_core::domain::wizard::{
    AdvanceOutcome, FieldErrorKind, RetreatOutcome, WizardState, WizardStep,
};

/// Fills every step with the profile from the strong worked example.
fn fill_strong_profile(state: &mut WizardState) {
    state.edit_field("experience_years", |d| d.set_experience_years(10));
    state.edit_field("industry", |d| d.set_industry(Industry::Consulting));
    state.answers_mut().set_relevant_certifications(2);
    state.answers_mut().set_previous_self_employment(true);
    assert!(matches!(state.advance(), AdvanceOutcome::Moved(_)));

    state.edit_field("network_strength", |d| {
        d.set_network_strength(NetworkStrength::Strong)
    });
    state.answers_mut().set_first_customers_pipeline(4);
    state.answers_mut().set_has_former_colleagues(true);
    assert!(matches!(state.advance(), AdvanceOutcome::Moved(_)));

    state.edit_field("startup_capital_available", |d| {
        d.set_startup_capital_available(20_000.0)
    });
    assert!(matches!(state.advance(), AdvanceOutcome::Moved(_)));

    state.edit_field("family_status", |d| {
        d.set_family_status(FamilyStatus::Single)
    });
    assert!(matches!(state.advance(), AdvanceOutcome::Moved(_)));

    state.edit_field("hours_per_week_available", |d| {
        d.set_hours_per_week_available(40)
    });
}

#[test]
fn strong_profile_completes_with_confidence_ninety_six() {
    let mut state = WizardState::new();
    fill_strong_profile(&mut state);

    match state.advance() {
        AdvanceOutcome::Completed(done) => {
            assert_eq!(done.confidence.value(), 96);
            assert_eq!(done.profile.experience_years, 10);
            assert_eq!(done.profile.network_strength, NetworkStrength::Strong);
            assert!(done.profile.meets_hours_floor());
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn minimal_profile_completes_with_confidence_zero() {
    let mut state = WizardState::new();
    state.edit_field("experience_years", |d| d.set_experience_years(0));
    state.edit_field("industry", |d| d.set_industry(Industry::Dienstleistung));
    state.advance();
    state.edit_field("network_strength", |d| {
        d.set_network_strength(NetworkStrength::None)
    });
    state.advance();
    state.edit_field("startup_capital_available", |d| {
        d.set_startup_capital_available(0.0)
    });
    state.advance();
    state.edit_field("family_status", |d| {
        d.set_family_status(FamilyStatus::Single)
    });
    state.advance();
    state.edit_field("hours_per_week_available", |d| {
        d.set_hours_per_week_available(15)
    });

    match state.advance() {
        AdvanceOutcome::Completed(done) => assert_eq!(done.confidence.value(), 0),
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn ten_hours_blocks_completion_with_the_eligibility_message() {
    let mut state = WizardState::new();
    fill_strong_profile(&mut state);
    state.edit_field("hours_per_week_available", |d| {
        d.set_hours_per_week_available(10)
    });

    assert_eq!(state.advance(), AdvanceOutcome::Rejected);
    let error = &state.errors()["hours_per_week_available"];
    assert_eq!(error.kind, FieldErrorKind::Eligibility);
    assert_eq!(
        error.message,
        "Mindestens 15h/Woche für Gründungszuschuss erforderlich!"
    );

    // Raising the hours clears the block and the wizard completes.
    state.edit_field("hours_per_week_available", |d| {
        d.set_hours_per_week_available(15)
    });
    assert!(matches!(state.advance(), AdvanceOutcome::Completed(_)));
}

#[test]
fn navigating_back_and_forth_keeps_answers() {
    let mut state = WizardState::new();
    state.edit_field("experience_years", |d| d.set_experience_years(5));
    state.edit_field("industry", |d| d.set_industry(Industry::Handwerk));
    state.advance();
    assert_eq!(state.current_step(), WizardStep::Network);

    assert_eq!(
        state.retreat(),
        RetreatOutcome::Moved(WizardStep::Experience)
    );
    assert_eq!(state.answers().experience_years(), Some(5));

    // Still valid, so forward works again immediately.
    assert_eq!(state.advance(), AdvanceOutcome::Moved(WizardStep::Network));
}

#[test]
fn confidence_preview_grows_as_answers_accumulate() {
    let mut state = WizardState::new();
    assert_eq!(state.confidence_preview().value(), 0);

    state.edit_field("experience_years", |d| d.set_experience_years(10));
    assert_eq!(state.confidence_preview().value(), 30);

    state.edit_field("network_strength", |d| {
        d.set_network_strength(NetworkStrength::Medium)
    });
    assert_eq!(state.confidence_preview().value(), 45);
}

#[test]
fn contact_and_business_context_for_the_handoff() {
    let contact = ContactDetails::new("Anna Schmidt", "anna@example.de").unwrap();
    assert_eq!(contact.name(), "Anna Schmidt");

    let context = BusinessContext::from_defaults(BusinessCategory::Consulting);
    assert!(context.used_defaults);
    assert_eq!(context.target_customer, TargetCustomer::B2bSmall);
    assert_eq!(context.stage, BusinessStage::Idea);
}
