use thiserror::Error;

use super::id::IdError;
use super::validation::FieldValidationError;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Conflict: expected `{field}` to be unique, '{value}' is already taken")]
    UniquenessConflict { field: String, value: String },

    #[error("Malformatted id: '{value}'")]
    MalformedIdentifier { value: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Storage unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse classification used by outer layers to pick a response class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller sent something it can fix
    ClientError,
    /// The identifier was well-formed but nothing lives there
    NotFound,
    /// The acting identity may not touch the record
    Forbidden,
    /// The persistence collaborator failed
    Unavailable,
    /// Something inside the core failed, e.g. password hashing
    Internal,
}

impl ErrorClass {
    /// Conventional HTTP status for this class
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ClientError => 400,
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::Unavailable => 503,
            Self::Internal => 500,
        }
    }
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn uniqueness(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UniquenessConflict {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn malformed_id(value: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            value: value.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classify the error for outer layers
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Validation { .. }
            | Self::UniquenessConflict { .. }
            | Self::MalformedIdentifier { .. } => ErrorClass::ClientError,
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::Forbidden { .. } => ErrorClass::Forbidden,
            Self::StoreUnavailable { .. } => ErrorClass::Unavailable,
            Self::Internal { .. } => ErrorClass::Internal,
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::UniquenessConflict { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<FieldValidationError> for DomainError {
    fn from(error: FieldValidationError) -> Self {
        let message = error.to_string();
        Self::Validation {
            field: error.field().to_string(),
            message,
        }
    }
}

impl From<IdError> for DomainError {
    fn from(error: IdError) -> Self {
        Self::MalformedIdentifier {
            value: error.value().to_string(),
        }
    }
}
