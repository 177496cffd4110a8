//! Contact form data and validation rules
//!
//! The page script posts `application/x-www-form-urlencoded` fields;
//! absent fields deserialize as empty strings. Handlers call
//! [`ContactForm::trimmed`] before [`Validate::validate`], matching
//! the server-side rules the page also checks client-side.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Raw contact form fields as posted by the landing page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    /// Submitter name (at least 2 characters)
    #[validate(length(min = 2, message = "Jméno musí mít alespoň 2 znaky."))]
    #[serde(default)]
    pub name: String,

    /// Submitter email (must contain `@`)
    #[validate(contains(pattern = "@", message = "Zadejte platný email."))]
    #[serde(default)]
    pub email: String,

    /// Optional phone number
    #[serde(default)]
    pub phone: String,

    /// Optional company or website name
    #[serde(default)]
    pub company: String,

    /// Selected interest code (required; see [`super::interest_label`])
    #[validate(length(min = 1, message = "Vyberte, o co máte zájem."))]
    #[serde(default)]
    pub interest: String,

    /// Optional free-text message
    #[serde(default)]
    pub message: String,

    /// Optional internal note carried into the lead description
    #[serde(default)]
    pub crm_note: String,

    /// Campaign source (e.g. `google`)
    #[serde(default)]
    pub utm_source: String,

    /// Campaign medium (e.g. `cpc`)
    #[serde(default)]
    pub utm_medium: String,

    /// Campaign name
    #[serde(default)]
    pub utm_campaign: String,

    /// Campaign term
    #[serde(default)]
    pub utm_term: String,

    /// Campaign content
    #[serde(default)]
    pub utm_content: String,
}

impl ContactForm {
    /// Strip surrounding whitespace from every field.
    #[must_use]
    pub fn trimmed(self) -> Self {
        let trim = |s: String| s.trim().to_string();
        Self {
            name: trim(self.name),
            email: trim(self.email),
            phone: trim(self.phone),
            company: trim(self.company),
            interest: trim(self.interest),
            message: trim(self.message),
            crm_note: trim(self.crm_note),
            utm_source: trim(self.utm_source),
            utm_medium: trim(self.utm_medium),
            utm_campaign: trim(self.utm_campaign),
            utm_term: trim(self.utm_term),
            utm_content: trim(self.utm_content),
        }
    }
}

/// Join violated rules into the single message shown to the submitter.
///
/// Fields report in fixed order (name, email, interest) so the message
/// is deterministic regardless of map iteration order.
#[must_use]
pub fn validation_message(errors: &ValidationErrors) -> String {
    const FIELD_ORDER: [&str; 3] = ["name", "email", "interest"];

    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in FIELD_ORDER {
        if let Some(list) = field_errors.get(field) {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                messages.push(message);
            }
        }
    }

    messages.join(" ")
}
