//! Contact form state: entered values, per-field errors, and touched fields.

use crate::models::ContactForm;
use crate::validation::{validate_contact_form, validate_field, FieldErrors, FormField};
use std::collections::HashSet;

/// State of the "add contact" form between keystrokes.
///
/// Errors are only shown for fields the user has left (blurred) or after a
/// submit attempt.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    data: ContactForm,
    errors: FieldErrors,
    touched: HashSet<FormField>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form values.
    pub fn data(&self) -> &ContactForm {
        &self.data
    }

    /// Record a keystroke; clears any error on that field.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.set(field, "");
    }

    /// The user left `field`: mark it touched and validate it alone.
    pub fn blur(&mut self, field: FormField) {
        self.touched.insert(field);
        self.errors.set(field, validate_field(&self.data, field));
    }

    /// Validate every field and mark all of them touched.
    ///
    /// Returns the form to send when it is valid.
    pub fn submit(&mut self) -> Option<ContactForm> {
        let result = validate_contact_form(&self.data);
        self.errors = result.errors;
        self.touched.extend(FormField::ALL);

        result.is_valid.then(|| self.data.clone())
    }

    /// Clear values, errors and touched state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The error to display for `field`; empty until the field is touched.
    pub fn visible_error(&self, field: FormField) -> &'static str {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            ""
        }
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        validate_contact_form(&self.data).is_valid
    }
}
