//! Contact form validation.
//!
//! Validation here is advisory: it drives inline feedback before a form is
//! submitted. The server only re-checks that required fields are present.

pub mod field;
pub mod form;

pub use field::{trim_input, validate_email, validate_message, validate_name, validate_phone};
pub use form::{validate_contact_form, validate_field, FieldErrors, FormField, ValidationResult};
