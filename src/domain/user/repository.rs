//! User repository trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// User storage with the username uniqueness check
#[async_trait]
pub trait UserRepository: Storage<User> {
    /// Get a user by their username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|u| u.username() == username))
    }

    /// Check if a username is taken
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    /// Insert a user unless another user already holds the username
    ///
    /// Stores that can check and write atomically override this; the default
    /// is check-then-insert.
    async fn insert_unique(&self, user: User) -> Result<User, DomainError> {
        if self.username_exists(user.username()).await? {
            return Err(DomainError::uniqueness("username", user.username()));
        }

        self.insert(user).await
    }

    /// Replace a user unless a different user already holds the username
    async fn replace_unique(&self, user: User) -> Result<Option<User>, DomainError> {
        let taken = self
            .get_by_username(user.username())
            .await?
            .is_some_and(|other| other.id() != user.id());

        if taken {
            return Err(DomainError::uniqueness("username", user.username()));
        }

        self.replace(user).await
    }
}
