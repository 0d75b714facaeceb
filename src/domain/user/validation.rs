//! User validation utilities

use crate::domain::validation::{validate_min_length, validate_required, FieldValidationError};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Validate a username
///
/// Rules:
/// - Required, not blank
/// - Minimum 3 characters
pub fn validate_username(username: Option<&str>) -> Result<&str, FieldValidationError> {
    let username = validate_required(username, "username")?;
    validate_min_length(username, MIN_USERNAME_LENGTH, "username")?;
    Ok(username)
}

/// Validate a plain-text password before hashing
///
/// Rules:
/// - Required, not blank
/// - Minimum 3 characters
pub fn validate_password(password: Option<&str>) -> Result<&str, FieldValidationError> {
    let password = validate_required(password, "password")?;
    validate_min_length(password, MIN_PASSWORD_LENGTH, "password")?;
    Ok(password)
}
