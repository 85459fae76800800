//! Per-field validators for contact form input.
//!
//! Each validator takes the raw field value (`None` when the field is absent)
//! and returns a human-readable message, or the empty string when the value
//! is acceptable. Validators are pure and never fail.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_TOO_LONG: &str = "Name must be less than 50 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";
pub const MESSAGE_TOO_LONG: &str = "Message must be less than 500 characters";

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

// ASCII digits only; `\d` would admit every Unicode digit.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s()+-]+$").expect("Failed to compile phone regex"));

/// Strip leading and trailing whitespace, including the byte-order mark
/// that `str::trim` keeps.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trimmed value, or `None` when absent or blank.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(trim_input).filter(|v| !v.is_empty())
}

/// Validate a contact name: required, 2 to 50 characters after trimming.
pub fn validate_name(name: Option<&str>) -> &'static str {
    let Some(name) = present(name) else {
        return NAME_REQUIRED;
    };

    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        NAME_TOO_SHORT
    } else if len > NAME_MAX_CHARS {
        NAME_TOO_LONG
    } else {
        ""
    }
}

/// Validate an email address: required, `local@domain.tld` shape.
pub fn validate_email(email: Option<&str>) -> &'static str {
    match present(email) {
        None => EMAIL_REQUIRED,
        Some(email) if !EMAIL_REGEX.is_match(email) => EMAIL_INVALID,
        Some(_) => "",
    }
}

/// Validate a phone number: required, only digits, whitespace, `-`, `(`, `)`
/// and `+`, with at least ten digits.
///
/// The structure of the number is not checked.
pub fn validate_phone(phone: Option<&str>) -> &'static str {
    let Some(phone) = present(phone) else {
        return PHONE_REQUIRED;
    };

    if !PHONE_REGEX.is_match(phone) {
        return PHONE_INVALID;
    }
    if phone.chars().filter(char::is_ascii_digit).count() < PHONE_MIN_DIGITS {
        return PHONE_TOO_SHORT;
    }
    ""
}

/// Validate an optional message: at most 500 characters, untrimmed.
pub fn validate_message(message: Option<&str>) -> &'static str {
    match message {
        Some(message) if message.chars().count() > MESSAGE_MAX_CHARS => MESSAGE_TOO_LONG,
        _ => "",
    }
}
