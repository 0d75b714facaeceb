//! In-memory storage implementation

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::{DomainError, User, UserRepository};

/// Thread-safe in-memory storage implementation
///
/// Records are kept in insertion order. Data is lost when the process
/// terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<E>>, DomainError> {
        self.entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<E>>, DomainError> {
        self.entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.iter().find(|e| e.key() == key).cloned())
    }

    async fn insert(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self.write()?;

        if entities.iter().any(|e| e.key() == entity.key()) {
            return Err(DomainError::storage(format!(
                "Duplicate key '{}'",
                entity.key().as_str()
            )));
        }

        debug!(key = entity.key().as_str(), "Inserting record");
        entities.push(entity.clone());
        Ok(entity)
    }

    async fn replace(&self, entity: E) -> Result<Option<E>, DomainError> {
        let mut entities = self.write()?;

        match entities.iter_mut().find(|e| e.key() == entity.key()) {
            Some(slot) => {
                debug!(key = entity.key().as_str(), "Replacing record");
                *slot = entity.clone();
                Ok(Some(entity))
            }
            None => {
                debug!(key = entity.key().as_str(), "Replace target is gone");
                Ok(None)
            }
        }
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self.write()?;
        let before = entities.len();

        entities.retain(|e| e.key() != key);

        let removed = entities.len() != before;
        debug!(key = key.as_str(), removed, "Deleting record");
        Ok(removed)
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.read()?.iter().any(|e| e.key() == key))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryStorage<User> {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .read()?
            .iter()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn insert_unique(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.write()?;

        if users.iter().any(|u| u.username() == user.username()) {
            return Err(DomainError::uniqueness("username", user.username()));
        }

        if users.iter().any(|u| u.id() == user.id()) {
            return Err(DomainError::storage(format!(
                "Duplicate key '{}'",
                user.id().as_str()
            )));
        }

        debug!(key = user.id().as_str(), "Inserting user");
        users.push(user.clone());
        Ok(user)
    }

    async fn replace_unique(&self, user: User) -> Result<Option<User>, DomainError> {
        let mut users = self.write()?;

        if users
            .iter()
            .any(|u| u.username() == user.username() && u.id() != user.id())
        {
            return Err(DomainError::uniqueness("username", user.username()));
        }

        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(slot) => {
                debug!(key = user.id().as_str(), "Replacing user");
                *slot = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
