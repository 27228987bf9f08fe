//! Required-field and shape validation for profiles
//!
//! Runs at the editor/repository boundary so stored records are complete
//! regardless of which front end produced them.

use serde::Serialize;
use thiserror::Error;

use super::profiles::NewProfile;

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Itemised list of field failures, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("validation failed for {} field(s)", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }
    }
}

/// Validate a profile body. Succeeds only when every required field is
/// populated and email/avatar are well formed.
pub fn validate_profile(profile: &NewProfile) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    errors.require("name", &profile.name);
    if profile.email.trim().is_empty() {
        errors.push("email", "is required");
    } else if !is_email(&profile.email) {
        errors.push("email", "must be an email address");
    }
    errors.require("phone", &profile.phone);
    errors.require("title", &profile.title);
    errors.require("company", &profile.company);
    errors.require("description", &profile.description);

    if !is_avatar(&profile.avatar) {
        errors.push("avatar", "must be a root-relative path or an http(s) URL");
    }

    errors.require("address.street", &profile.address.street);
    errors.require("address.city", &profile.address.city);
    errors.require("address.zipCode", &profile.address.zip_code);
    errors.require("address.country", &profile.address.country);

    for (i, skill) in profile.skills.iter().enumerate() {
        if skill.trim().is_empty() {
            errors.push(format!("skills[{i}]"), "must not be blank");
        }
    }

    for (i, entry) in profile.experience.iter().enumerate() {
        errors.require(&format!("experience[{i}].role"), &entry.role);
        errors.require(&format!("experience[{i}].company"), &entry.company);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_avatar(value: &str) -> bool {
    if value.starts_with('/') {
        return !value.starts_with("//");
    }
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
