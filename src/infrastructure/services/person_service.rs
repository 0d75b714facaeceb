//! Person service - CRUD operations for the phonebook

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::person::MIN_NAME_LENGTH;
use crate::domain::storage::Storage;
use crate::domain::{
    validate_min_length, validate_person, validate_phone_number, validate_required, DomainError,
    Normalize, Person, PersonView, PhonebookInfo,
};

use super::parse_id;

/// Request to create a new phonebook entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Request to update an existing phonebook entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Person service for CRUD operations
#[derive(Debug)]
pub struct PersonService<S: Storage<Person>> {
    storage: Arc<S>,
}

impl<S: Storage<Person>> PersonService<S> {
    /// Create a new PersonService with the given storage
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// List all entries
    pub async fn list(&self) -> Result<Vec<PersonView>, DomainError> {
        let persons = self.storage.list().await?;
        Ok(persons.iter().map(Normalize::normalize).collect())
    }

    /// Get an entry by ID
    pub async fn get(&self, id: &str) -> Result<PersonView, DomainError> {
        let person_id = parse_id(id)?;

        self.storage
            .get(&person_id)
            .await?
            .map(|p| p.normalize())
            .ok_or_else(|| DomainError::not_found(format!("Person '{}' not found", id)))
    }

    /// Create a new entry
    pub async fn create(&self, request: CreatePersonRequest) -> Result<PersonView, DomainError> {
        let name = validate_required(request.name.as_deref(), "name")?;
        validate_min_length(name, MIN_NAME_LENGTH, "name")?;

        let number = validate_required(request.number.as_deref(), "number")?;
        validate_phone_number(number)?;

        let person = self.storage.insert(Person::new(name, number)).await?;
        Ok(person.normalize())
    }

    /// Update an existing entry
    pub async fn update(
        &self,
        id: &str,
        request: UpdatePersonRequest,
    ) -> Result<PersonView, DomainError> {
        let person_id = parse_id(id)?;

        let mut person = self
            .storage
            .get(&person_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Person '{}' not found", id)))?;

        if let Some(name) = request.name {
            person.set_name(name);
        }

        if let Some(number) = request.number {
            person.set_number(number);
        }

        validate_person(person.name(), person.number())?;
        person.touch();

        // the entry may have been removed since it was read
        let person = self
            .storage
            .replace(person)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Person '{}' not found", id)))?;

        Ok(person.normalize())
    }

    /// Delete an entry by ID, returns false if it was already gone
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let person_id = parse_id(id)?;
        self.storage.delete(&person_id).await
    }

    /// Find the first entry with exactly this name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<PersonView>, DomainError> {
        let persons = self.storage.list().await?;

        Ok(persons
            .iter()
            .find(|p| p.name() == name)
            .map(Normalize::normalize))
    }

    /// Entries whose name contains the filter, ignoring case
    pub async fn search(&self, filter: &str) -> Result<Vec<PersonView>, DomainError> {
        let needle = filter.to_lowercase();
        let persons = self.storage.list().await?;

        Ok(persons
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .map(Normalize::normalize)
            .collect())
    }

    /// Add an entry, or replace the number of an existing entry with the same name
    pub async fn add_or_update_number(
        &self,
        request: CreatePersonRequest,
    ) -> Result<PersonView, DomainError> {
        let existing = match request.name.as_deref() {
            Some(name) => self.find_by_name(name).await?,
            None => None,
        };

        match existing {
            Some(person) => {
                self.update(
                    person.id.as_str(),
                    UpdatePersonRequest {
                        name: None,
                        number: request.number,
                    },
                )
                .await
            }
            None => self.create(request).await,
        }
    }

    /// Number of entries and when the count was taken
    pub async fn info(&self) -> Result<PhonebookInfo, DomainError> {
        Ok(PhonebookInfo {
            entries: self.storage.count().await?,
            generated_at: Utc::now(),
        })
    }
}
