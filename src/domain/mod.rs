//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `profile` - Founder profile record, draft collection, confidence scoring
//! - `wizard` - Step sequencing, per-step validation, wizard state
//! - `intake` - Contact capture and business context
//! - `assessment` - Scenario assessment stage machine and payload types

pub mod assessment;
pub mod foundation;
pub mod intake;
pub mod profile;
pub mod wizard;
