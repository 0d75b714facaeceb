//! Phonebook entry entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::normalize::Normalize;
use crate::domain::record::RecordMeta;
use crate::domain::storage::StorageEntity;
use crate::domain::RecordId;

/// Persisted phonebook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    id: RecordId,
    name: String,
    number: String,
    #[serde(flatten)]
    meta: RecordMeta,
}

impl Person {
    /// Create a new entry with a freshly generated identifier
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            number: number.into(),
            meta: RecordMeta::new(),
        }
    }

    /// Use a specific identifier
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    // Getters

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    // Mutators

    /// Record one successful write in the metadata
    pub fn touch(&mut self) {
        self.meta.touch();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }
}

impl StorageEntity for Person {
    type Key = RecordId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// External representation of a phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub id: RecordId,
    pub name: String,
    pub number: String,
}

impl Normalize for Person {
    type View = PersonView;

    fn normalize(&self) -> PersonView {
        PersonView {
            id: self.id.clone(),
            name: self.name.clone(),
            number: self.number.clone(),
        }
    }
}

/// Summary of the phonebook contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonebookInfo {
    pub entries: usize,
    pub generated_at: DateTime<Utc>,
}

impl std::fmt::Display for PhonebookInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Phonebook has info for {} people\n{}",
            self.entries,
            self.generated_at.to_rfc2822()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_creation() {
        let person = Person::new("Arto Hellas", "040-123456");

        assert_eq!(person.name(), "Arto Hellas");
        assert_eq!(person.number(), "040-123456");
        assert_eq!(person.meta().version(), 0);
    }

    #[test]
    fn test_setters_leave_version_to_touch() {
        let mut person = Person::new("Arto Hellas", "040-123456");

        person.set_name("Arto Vihavainen");
        person.set_number("040-654321");
        assert_eq!(person.number(), "040-654321");
        assert_eq!(person.meta().version(), 0);

        person.touch();
        assert_eq!(person.meta().version(), 1);
    }

    #[test]
    fn test_internal_serialization() {
        let person = Person::new("Arto Hellas", "040-123456");
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["_id"], serde_json::json!(person.id().as_str()));
        assert_eq!(json["__v"], serde_json::json!(0));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_round_trip_from_store_document() {
        let doc = serde_json::json!({
            "_id": "5a422a851b54a676234d17f7",
            "name": "Ada Lovelace",
            "number": "39-44-5323523",
            "__v": 0,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });

        let person: Person = serde_json::from_value(doc).unwrap();
        assert_eq!(person.id().as_str(), "5a422a851b54a676234d17f7");
    }

    #[test]
    fn test_normalize() {
        let person = Person::new("Arto Hellas", "040-123456");
        let view = person.normalize();

        assert_eq!(&view.id, person.id());
        assert_eq!(view.name, "Arto Hellas");

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("__v").is_none());
    }

    #[test]
    fn test_info_display() {
        let info = PhonebookInfo {
            entries: 4,
            generated_at: Utc::now(),
        };

        assert!(info.to_string().starts_with("Phonebook has info for 4 people"));
    }
}
