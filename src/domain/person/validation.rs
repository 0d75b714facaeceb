//! Phonebook entry validation

use crate::domain::validation::{
    validate_min_length, validate_phone_number, validate_required, FieldValidationError,
};

/// Minimum length of a phonebook name
pub const MIN_NAME_LENGTH: usize = 3;

/// Validate a complete phonebook entry
pub fn validate_person(name: &str, number: &str) -> Result<(), FieldValidationError> {
    let name = validate_required(Some(name), "name")?;
    validate_min_length(name, MIN_NAME_LENGTH, "name")?;

    let number = validate_required(Some(number), "number")?;
    validate_phone_number(number)
}
