//! Business category selection and the pre-filled context derived from it.
//!
//! Picking a category pre-fills target customer and stage from a defaults
//! table so most founders can continue with one tap; the customized path
//! lets them override both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry category the founder picks on the business screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Consulting,
    Tech,
    Ecommerce,
    Service,
    Creative,
    Health,
    Gastro,
    Education,
}

/// Who the business primarily sells to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCustomer {
    B2bSmall,
    B2bLarge,
    B2bMixed,
    B2cFamilies,
    B2cYoung,
    B2cProfessionals,
    B2cMixed,
}

/// How far along the venture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStage {
    Idea,
    Planning,
    Prototype,
    Mvp,
}

/// Pre-fill for one category: customer, stage, and a short insight shown
/// alongside the suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartDefault {
    pub customer: TargetCustomer,
    pub customer_label: &'static str,
    pub stage: BusinessStage,
    pub stage_label: &'static str,
    pub confidence: f32,
    pub insight: &'static str,
}

impl BusinessCategory {
    /// All categories in presentation order.
    pub const ALL: [BusinessCategory; 8] = [
        BusinessCategory::Consulting,
        BusinessCategory::Tech,
        BusinessCategory::Ecommerce,
        BusinessCategory::Service,
        BusinessCategory::Creative,
        BusinessCategory::Health,
        BusinessCategory::Gastro,
        BusinessCategory::Education,
    ];

    /// Category label shown to the user.
    pub fn label_de(&self) -> &'static str {
        match self {
            BusinessCategory::Consulting => "Beratung / Coaching",
            BusinessCategory::Tech => "Tech / Software",
            BusinessCategory::Ecommerce => "E-Commerce / Handel",
            BusinessCategory::Service => "Dienstleistung",
            BusinessCategory::Creative => "Kreativ / Design",
            BusinessCategory::Health => "Gesundheit / Wellness",
            BusinessCategory::Gastro => "Gastronomie / Food",
            BusinessCategory::Education => "Bildung / Training",
        }
    }

    /// Pre-fill suggestion for this category.
    pub fn smart_default(&self) -> SmartDefault {
        match self {
            BusinessCategory::Consulting => SmartDefault {
                customer: TargetCustomer::B2bSmall,
                customer_label: "Kleine & mittlere Unternehmen",
                stage: BusinessStage::Idea,
                stage_label: "Ideenphase",
                confidence: 0.75,
                insight: "75% der Berater starten mit B2B-Kunden",
            },
            BusinessCategory::Tech => SmartDefault {
                customer: TargetCustomer::B2bMixed,
                customer_label: "Unternehmen verschiedener Größen",
                stage: BusinessStage::Idea,
                stage_label: "Ideenphase",
                confidence: 0.70,
                insight: "Tech-Gründer haben oft schon erste Prototypen",
            },
            BusinessCategory::Ecommerce => SmartDefault {
                customer: TargetCustomer::B2cMixed,
                customer_label: "Endverbraucher (B2C)",
                stage: BusinessStage::Planning,
                stage_label: "In der Planung",
                confidence: 0.65,
                insight: "E-Commerce startet meist mit klarer Nische",
            },
            BusinessCategory::Service => SmartDefault {
                customer: TargetCustomer::B2cMixed,
                customer_label: "Privatpersonen & Haushalte",
                stage: BusinessStage::Idea,
                stage_label: "Ideenphase",
                confidence: 0.70,
                insight: "Lokale Dienstleister haben oft schon Netzwerke",
            },
            BusinessCategory::Creative => SmartDefault {
                customer: TargetCustomer::B2bSmall,
                customer_label: "Kleine Unternehmen & Startups",
                stage: BusinessStage::Idea,
                stage_label: "Ideenphase",
                confidence: 0.72,
                insight: "Kreative bringen meist Portfolio-Erfahrung mit",
            },
            BusinessCategory::Health => SmartDefault {
                customer: TargetCustomer::B2cProfessionals,
                customer_label: "Berufstätige & Gesundheitsbewusste",
                stage: BusinessStage::Planning,
                stage_label: "In der Planung",
                confidence: 0.68,
                insight: "Gesundheitsbranche erfordert oft Zertifikate",
            },
            BusinessCategory::Gastro => SmartDefault {
                customer: TargetCustomer::B2cFamilies,
                customer_label: "Familien & lokale Gemeinschaft",
                stage: BusinessStage::Planning,
                stage_label: "In der Planung",
                confidence: 0.80,
                insight: "Gastro braucht Standort & Konzept zuerst",
            },
            BusinessCategory::Education => SmartDefault {
                customer: TargetCustomer::B2cMixed,
                customer_label: "Lernwillige aller Altersgruppen",
                stage: BusinessStage::Idea,
                stage_label: "Ideenphase",
                confidence: 0.65,
                insight: "Online-Bildung wächst stark",
            },
        }
    }
}

impl TargetCustomer {
    /// Generic option label, used when the founder picks explicitly.
    pub fn label_de(&self) -> &'static str {
        match self {
            TargetCustomer::B2bSmall => "Kleine Unternehmen (KMU)",
            TargetCustomer::B2bLarge => "Größere Unternehmen",
            TargetCustomer::B2bMixed => "Unternehmen verschiedener Größen",
            TargetCustomer::B2cFamilies => "Familien",
            TargetCustomer::B2cYoung => "Junge Erwachsene (18-35)",
            TargetCustomer::B2cProfessionals => "Berufstätige",
            TargetCustomer::B2cMixed => "Verschiedene Privatpersonen",
        }
    }
}

impl BusinessStage {
    /// Generic option label, used when the founder picks explicitly.
    pub fn label_de(&self) -> &'static str {
        match self {
            BusinessStage::Idea => "Nur eine Idee",
            BusinessStage::Planning => "In der Planung",
            BusinessStage::Prototype => "Erste Tests / Prototyp",
            BusinessStage::Mvp => "Erste Kunden",
        }
    }
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusinessCategory::Consulting => "consulting",
            BusinessCategory::Tech => "tech",
            BusinessCategory::Ecommerce => "ecommerce",
            BusinessCategory::Service => "service",
            BusinessCategory::Creative => "creative",
            BusinessCategory::Health => "health",
            BusinessCategory::Gastro => "gastro",
            BusinessCategory::Education => "education",
        };
        write!(f, "{}", s)
    }
}

/// The business description carried into the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub category: BusinessCategory,
    pub category_label: String,
    pub target_customer: TargetCustomer,
    pub target_customer_label: String,
    pub stage: BusinessStage,
    pub stage_label: String,
    /// True when the founder accepted the suggestion unchanged.
    pub used_defaults: bool,
}

impl BusinessContext {
    /// Builds the context from the category's defaults, accepting the
    /// suggestion as-is.
    pub fn from_defaults(category: BusinessCategory) -> Self {
        let defaults = category.smart_default();
        Self {
            category,
            category_label: category.label_de().to_string(),
            target_customer: defaults.customer,
            target_customer_label: defaults.customer_label.to_string(),
            stage: defaults.stage,
            stage_label: defaults.stage_label.to_string(),
            used_defaults: true,
        }
    }

    /// Builds the context from explicit customer and stage choices.
    pub fn customized(
        category: BusinessCategory,
        customer: TargetCustomer,
        stage: BusinessStage,
    ) -> Self {
        Self {
            category,
            category_label: category.label_de().to_string(),
            target_customer: customer,
            target_customer_label: customer.label_de().to_string(),
            stage,
            stage_label: stage.label_de().to_string(),
            used_defaults: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_default() {
        for category in BusinessCategory::ALL {
            let defaults = category.smart_default();
            assert!(!defaults.insight.is_empty());
            assert!(defaults.confidence > 0.0 && defaults.confidence <= 1.0);
        }
    }

    #[test]
    fn consulting_defaults_to_small_b2b_in_idea_stage() {
        let context = BusinessContext::from_defaults(BusinessCategory::Consulting);
        assert_eq!(context.target_customer, TargetCustomer::B2bSmall);
        assert_eq!(context.target_customer_label, "Kleine & mittlere Unternehmen");
        assert_eq!(context.stage, BusinessStage::Idea);
        assert!(context.used_defaults);
    }

    #[test]
    fn gastro_defaults_to_families_in_planning() {
        let defaults = BusinessCategory::Gastro.smart_default();
        assert_eq!(defaults.customer, TargetCustomer::B2cFamilies);
        assert_eq!(defaults.stage, BusinessStage::Planning);
        assert_eq!(defaults.insight, "Gastro braucht Standort & Konzept zuerst");
    }

    #[test]
    fn customized_context_uses_generic_option_labels() {
        let context = BusinessContext::customized(
            BusinessCategory::Tech,
            TargetCustomer::B2bLarge,
            BusinessStage::Mvp,
        );
        assert_eq!(context.target_customer_label, "Größere Unternehmen");
        assert_eq!(context.stage_label, "Erste Kunden");
        assert!(!context.used_defaults);
    }

    #[test]
    fn category_serializes_to_lowercase_id() {
        assert_eq!(
            serde_json::to_string(&BusinessCategory::Ecommerce).unwrap(),
            "\"ecommerce\""
        );
    }

    #[test]
    fn target_customer_serializes_to_snake_case_id() {
        assert_eq!(
            serde_json::to_string(&TargetCustomer::B2cProfessionals).unwrap(),
            "\"b2c_professionals\""
        );
    }
}
