//! Contact model and the form payload used to create one.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::validation::{trim_input, FormField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact entry.
///
/// Serialized the way the REST API exposes it: the identifier under `_id`
/// and the creation time under `createdAt` (RFC 3339).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: ContactId,

    /// Full name of the contact
    pub name: String,

    /// Email address, stored as entered (format is checked client-side only)
    pub email: String,

    /// Phone number, stored as entered
    pub phone: String,

    /// Optional free-form message
    #[serde(default)]
    pub message: String,

    /// When the contact was created
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build a stored contact from a checked draft.
    pub fn new(id: ContactId, draft: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            created_at,
        }
    }
}

/// Raw, untrimmed contact fields as entered by a user.
///
/// Every field may be absent on the wire; absence is treated as empty input
/// by the validators.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactForm {
    /// Create a form with the three required fields filled in.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            message: None,
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Read a single field.
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Phone => self.phone.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
        }
    }
}

/// A contact draft that passed the server-side presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewContact {
    /// Check that name, email and phone are present.
    ///
    /// Only presence is enforced; required values are trimmed and a missing
    /// message becomes the empty string.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingRequiredFields` when a required field is
    /// absent, empty or whitespace-only.
    pub fn from_form(form: ContactForm) -> ContactResult<Self> {
        fn required(value: Option<String>) -> ContactResult<String> {
            value
                .map(|v| trim_input(&v).to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ContactError::MissingRequiredFields)
        }

        Ok(Self {
            name: required(form.name)?,
            email: required(form.email)?,
            phone: required(form.phone)?,
            message: form.message.unwrap_or_default(),
        })
    }
}
