//! Field-level validation rules shared by every entity kind

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum total length of a phone number, hyphen included
pub const MIN_PHONE_NUMBER_LENGTH: usize = 8;

/// Two or three leading ASCII digits, a hyphen, then one or more ASCII digits
static PHONE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2,3}-[0-9]+$").expect("phone number pattern is valid"));

/// Errors produced by field validators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldValidationError {
    #[error("Path `{field}` is required")]
    Required { field: String },

    #[error("Path `{field}` (`{value}`) is shorter than the minimum allowed length ({min})")]
    TooShort {
        field: String,
        value: String,
        min: usize,
    },

    #[error(
        "{value} is not a valid phone number! Phone number must have at least 8 characters and be in format: 09-1234556 or 040-22334455"
    )]
    InvalidPhoneNumber { field: String, value: String },
}

impl FieldValidationError {
    /// The field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::InvalidPhoneNumber { field, .. } => field,
        }
    }
}

/// Check the phone number shape and length
///
/// Both rules are independently necessary: `123-4` has the right shape but is
/// too short.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_PATTERN.is_match(value) && value.chars().count() >= MIN_PHONE_NUMBER_LENGTH
}

/// Validate the `number` field of a phonebook entry
pub fn validate_phone_number(value: &str) -> Result<(), FieldValidationError> {
    if is_valid_phone_number(value) {
        Ok(())
    } else {
        Err(FieldValidationError::InvalidPhoneNumber {
            field: "number".to_string(),
            value: value.to_string(),
        })
    }
}

/// Fail when the value is absent, empty, or whitespace-only
pub fn validate_required<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<&'a str, FieldValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FieldValidationError::Required {
            field: field.to_string(),
        }),
    }
}

/// Fail when the value has fewer than `min` characters
pub fn validate_min_length(
    value: &str,
    min: usize,
    field: &str,
) -> Result<(), FieldValidationError> {
    if value.chars().count() < min {
        return Err(FieldValidationError::TooShort {
            field: field.to_string(),
            value: value.to_string(),
            min,
        });
    }

    Ok(())
}
