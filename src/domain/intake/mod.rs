//! Intake capture preceding the assessment.
//!
//! Contact details (name/email) and the business context the founder
//! describes before questions start.

mod business_context;
mod contact;

pub use business_context::{
    BusinessCategory, BusinessContext, BusinessStage, SmartDefault, TargetCustomer,
};
pub use contact::ContactDetails;
