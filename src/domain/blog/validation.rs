//! Blog validation

use crate::domain::validation::{validate_required, FieldValidationError};

/// Check the fields a blog cannot be persisted without
///
/// Returns the validated `(title, url)` pair.
pub fn validate_blog<'a>(
    title: Option<&'a str>,
    url: Option<&'a str>,
) -> Result<(&'a str, &'a str), FieldValidationError> {
    let title = validate_required(title, "title")?;
    let url = validate_required(url, "url")?;
    Ok((title, url))
}
