//! Contact details collected on the name/email screens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

// Same pattern the product applies on the email screen.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validated name and email of the prospective founder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    name: String,
    email: String,
}

impl ContactDetails {
    /// Creates contact details from raw input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed name or email is empty
    /// - `InvalidFormat` if the email does not match the product's pattern
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "Bitte gültige E-Mail-Adresse angeben",
            ));
        }

        Ok(Self { name, email })
    }

    /// Returns the founder's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the founder's email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}
