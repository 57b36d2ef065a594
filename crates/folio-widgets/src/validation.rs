#![forbid(unsafe_code)]

//! Contact-field validators.
//!
//! Each validator is a pure function of the raw field text. Values are
//! trimmed before checking; lengths count Unicode scalar values.

use std::sync::LazyLock;

use folio_core::surface::FieldKind;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// local@domain.tld: ASCII local part, dotted/hyphenated domain, 2+ letter TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error message, if invalid.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

fn required_min_chars(
    raw: &str,
    min: usize,
    required: &'static str,
    too_short: &'static str,
) -> ValidationResult {
    let value = raw.trim();
    if value.is_empty() {
        ValidationResult::Invalid(required)
    } else if value.chars().count() < min {
        ValidationResult::Invalid(too_short)
    } else {
        ValidationResult::Valid
    }
}

#[must_use]
pub fn validate_name(raw: &str) -> ValidationResult {
    required_min_chars(raw, NAME_MIN_CHARS, NAME_REQUIRED, NAME_TOO_SHORT)
}

#[must_use]
pub fn validate_email(raw: &str) -> ValidationResult {
    let value = raw.trim();
    if value.is_empty() {
        ValidationResult::Invalid(EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(value) {
        ValidationResult::Invalid(EMAIL_INVALID)
    } else {
        ValidationResult::Valid
    }
}

#[must_use]
pub fn validate_message(raw: &str) -> ValidationResult {
    required_min_chars(raw, MESSAGE_MIN_CHARS, MESSAGE_REQUIRED, MESSAGE_TOO_SHORT)
}

/// Dispatch to the validator for `field`.
#[must_use]
pub fn validate(field: FieldKind, raw: &str) -> ValidationResult {
    match field {
        FieldKind::Name => validate_name(raw),
        FieldKind::Email => validate_email(raw),
        FieldKind::Message => validate_message(raw),
    }
}
