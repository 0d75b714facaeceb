//! Loading stored documents from JSON exports

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::normalize::INTERNAL_ID_FIELD;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::{DomainError, User};

/// Parse a JSON array of stored documents
///
/// Accepts both raw store exports (`_id`) and normalized documents (`id`).
/// Two documents with the same identifier reject the whole list.
pub fn parse_documents<E: StorageEntity>(json: &str) -> Result<Vec<E>, DomainError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| DomainError::storage(format!("Invalid JSON document list: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(DomainError::storage("Expected a JSON array of documents"));
    };

    let documents: Vec<E> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(denormalize(item)).map_err(|e| {
                DomainError::storage(format!("Invalid document at index {}: {}", index, e))
            })
        })
        .collect::<Result<_, _>>()?;

    let mut seen = HashSet::new();
    for (index, document) in documents.iter().enumerate() {
        if !seen.insert(document.key()) {
            return Err(DomainError::storage(format!(
                "Duplicate id '{}' at index {}",
                document.key().as_str(),
                index
            )));
        }
    }

    Ok(documents)
}

/// Reject a user list in which two users share a username
pub fn ensure_unique_usernames(users: &[User]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();

    match users.iter().find(|user| !seen.insert(user.username())) {
        Some(user) => Err(DomainError::uniqueness("username", user.username())),
        None => Ok(()),
    }
}

/// Read and parse a JSON file of stored documents
pub fn load_documents<E: StorageEntity>(path: impl AsRef<Path>) -> Result<Vec<E>, DomainError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::storage(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    let documents = parse_documents(&content)?;
    debug!(path = %path.display(), count = documents.len(), "Loaded documents");
    Ok(documents)
}

fn denormalize(document: Value) -> Value {
    match document {
        Value::Object(mut fields) if !fields.contains_key(INTERNAL_ID_FIELD) => {
            if let Some(id) = fields.remove("id") {
                fields.insert(INTERNAL_ID_FIELD.to_string(), id);
            }
            Value::Object(fields)
        }
        other => other,
    }
}
