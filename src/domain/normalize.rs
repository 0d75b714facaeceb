//! Projection of persisted records into their external representation

use serde::Serialize;
use serde_json::Value;

/// Internal identifier field as written by the document store
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Metadata fields that never leave the core
const METADATA_FIELDS: &[&str] = &["__v", "createdAt", "updatedAt"];

/// Secret fields stripped from user documents
const USER_SECRET_FIELDS: &[&str] = &["passwordHash", "password"];

/// Kind of document being normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    User,
    Blog,
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" | "persons" => Ok(Self::Person),
            "user" | "users" => Ok(Self::User),
            "blog" | "blogs" => Ok(Self::Blog),
            other => Err(format!("unknown entity kind '{}'", other)),
        }
    }
}

/// A record with an external-safe view
pub trait Normalize {
    /// The representation handed to callers
    type View: Serialize;

    /// Build the external view of this record
    fn normalize(&self) -> Self::View;
}

/// Normalize a stored document of the given kind
///
/// Renames `_id` to `id`, drops storage metadata and, for users, any password
/// material. Running it on an already normalized document changes nothing.
pub fn normalize_document(kind: EntityKind, document: Value) -> Value {
    let Value::Object(mut fields) = document else {
        return document;
    };

    if let Some(internal_id) = fields.remove(INTERNAL_ID_FIELD) {
        let id = match internal_id {
            Value::String(s) => Value::String(s),
            Value::Object(ref inner) if inner.contains_key("$oid") => inner["$oid"].clone(),
            other => Value::String(other.to_string()),
        };
        fields.insert("id".to_string(), id);
    }

    for field in METADATA_FIELDS {
        fields.remove(*field);
    }

    if kind == EntityKind::User {
        for field in USER_SECRET_FIELDS {
            fields.remove(*field);
        }
    }

    Value::Object(fields)
}

/// Normalize every document of a JSON array, or a single document
pub fn normalize_documents(kind: EntityKind, documents: Value) -> Value {
    match documents {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| normalize_document(kind, item))
                .collect(),
        ),
        other => normalize_document(kind, other),
    }
}
