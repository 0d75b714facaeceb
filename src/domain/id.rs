//! Record identifiers
//!
//! Identifiers follow the document-store object id shape: 12 bytes rendered
//! as 24 hexadecimal characters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::storage::StorageKey;

/// Number of hexadecimal characters in a record identifier
pub const RECORD_ID_LENGTH: usize = 24;

/// Raised when a string is not a syntactically valid identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid id: expected {} hexadecimal characters", RECORD_ID_LENGTH)]
pub struct IdError {
    value: String,
}

impl IdError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier shared by persons, users and blogs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Parse an identifier, normalising hex digits to lowercase
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();

        if id.len() != RECORD_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError { value: id });
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        let mut bytes = [0u8; RECORD_ID_LENGTH / 2];
        rand::thread_rng().fill(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for RecordId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id() {
        let id = RecordId::new("5a422a851b54a676234d17f7").unwrap();
        assert_eq!(id.as_str(), "5a422a851b54a676234d17f7");
    }

    #[test]
    fn test_uppercase_is_normalised() {
        let id = RecordId::new("5A422A851B54A676234D17F7").unwrap();
        assert_eq!(id.as_str(), "5a422a851b54a676234d17f7");
    }

    #[test]
    fn test_malformed_ids() {
        assert!(RecordId::new("").is_err());
        assert!(RecordId::new("notavalidid").is_err());
        // one character short
        assert!(RecordId::new("5a3d5da59070081a82a3445").is_err());
        assert!(RecordId::new("5a422a851b54a676234d17f7a").is_err());
        assert!(RecordId::new("5a422a851b54a676234d17fz").is_err());
    }

    #[test]
    fn test_error_keeps_input() {
        let error = RecordId::new("notavalidid").unwrap_err();
        assert_eq!(error.value(), "notavalidid");
    }

    #[test]
    fn test_generate() {
        let a = RecordId::generate();
        let b = RecordId::generate();

        assert_eq!(a.as_str().len(), RECORD_ID_LENGTH);
        assert!(RecordId::new(a.as_str()).is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde() {
        let id = RecordId::new("5a422a851b54a676234d17f7").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5a422a851b54a676234d17f7\"");

        let parsed: Result<RecordId, _> = serde_json::from_str("\"nope\"");
        assert!(parsed.is_err());
    }
}
