//! Whole-form validation.

use super::field::{validate_email, validate_message, validate_name, validate_phone};
use crate::models::ContactForm;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Run this field's validator against the matching form value.
    pub fn validate(&self, form: &ContactForm) -> &'static str {
        let value = form.get(*self);
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Phone => validate_phone(value),
            Self::Message => validate_message(value),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "message" => Ok(Self::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// Error message per field; the empty string means no error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> &'static str {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Phone => self.phone,
            FormField::Message => self.message,
        }
    }

    pub fn set(&mut self, field: FormField, error: &'static str) {
        match field {
            FormField::Name => self.name = error,
            FormField::Email => self.email = error,
            FormField::Phone => self.phone = error,
            FormField::Message => self.message = error,
        }
    }

    /// True when no field carries an error.
    pub fn is_clear(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Fields that carry an error, with their messages.
    pub fn failures(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        FormField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, error)| !error.is_empty())
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

/// Validate every field of a contact form.
///
/// All four validators always run so the caller gets a complete error map.
pub fn validate_contact_form(form: &ContactForm) -> ValidationResult {
    let mut errors = FieldErrors::default();
    for field in FormField::ALL {
        errors.set(field, field.validate(form));
    }

    ValidationResult {
        is_valid: errors.is_clear(),
        errors,
    }
}

/// Validate a single field, as done when the field loses focus.
pub fn validate_field(form: &ContactForm, field: FormField) -> &'static str {
    field.validate(form)
}
