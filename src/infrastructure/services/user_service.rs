//! User service for account management and credential checks

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::storage::Storage;
use crate::domain::user::{validate_password, validate_username, UserRepository};
use crate::domain::{DomainError, Normalize, User, UserView};
use crate::infrastructure::password::PasswordHasher;

use super::parse_id;

/// Request for creating a new user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Request for updating a user; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// User service for account management
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserView, DomainError> {
        let username = validate_username(request.username.as_deref())?;
        let password = validate_password(request.password.as_deref())?;

        if self.repository.username_exists(username).await? {
            return Err(DomainError::uniqueness("username", username));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User::new(username, request.name.clone(), password_hash);

        // rechecked by the store in the same write
        let user = self.repository.insert_unique(user).await?;
        Ok(user.normalize())
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<UserView>, DomainError> {
        let users = self.repository.list().await?;
        Ok(users.iter().map(Normalize::normalize).collect())
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<UserView, DomainError> {
        let user_id = parse_id(id)?;

        self.repository
            .get(&user_id)
            .await?
            .map(|u| u.normalize())
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// Update a user
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<UserView, DomainError> {
        let user_id = parse_id(id)?;

        let mut user = self
            .repository
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(ref username) = request.username {
            let username = validate_username(Some(username.as_str()))?;

            if username != user.username() {
                let taken = self
                    .repository
                    .get_by_username(username)
                    .await?
                    .is_some_and(|other| other.id() != user.id());

                if taken {
                    return Err(DomainError::uniqueness("username", username));
                }

                user.set_username(username);
            }
        }

        if request.name.is_some() {
            user.set_name(request.name.clone());
        }

        if let Some(ref password) = request.password {
            let password = validate_password(Some(password.as_str()))?;
            user.set_password_hash(self.hasher.hash(password)?);
        }

        user.touch();

        let user = self
            .repository
            .replace_unique(user)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        Ok(user.normalize())
    }

    /// Delete a user, returns false if it was already gone
    ///
    /// Blogs referencing the user are left as they are.
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = parse_id(id)?;
        self.repository.delete(&user_id).await
    }

    /// Check a username and password pair
    ///
    /// Returns `None` for an unknown username or a wrong password.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserView>, DomainError> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            return Ok(None);
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user.normalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::mock::MockStorage;
    use crate::infrastructure::password::{Argon2Hasher, MockPasswordHasher};
    use crate::infrastructure::storage::InMemoryStorage;

    type TestService = UserService<InMemoryStorage<User>, MockPasswordHasher>;

    fn fake_hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{}", password)));
        hasher
            .expect_verify()
            .returning(|password, hash| hash == format!("hashed:{}", password));
        hasher
    }

    fn create_service() -> (TestService, Arc<InMemoryStorage<User>>) {
        let storage = Arc::new(InMemoryStorage::with_entities(vec![User::new(
            "root",
            None,
            "hashed:sekret",
        )]));
        (
            UserService::new(storage.clone(), Arc::new(fake_hasher())),
            storage,
        )
    }

    fn request(username: &str, name: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: Some(username.to_string()),
            name: Some(name.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let (service, storage) = create_service();

        let user = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        assert_eq!(user.username, "mluukkai");
        assert_eq!(user.name.as_deref(), Some("Matti Luukkainen"));
        assert_eq!(storage.count().await.unwrap(), 2);

        let stored = storage.get_by_username("mluukkai").await.unwrap().unwrap();
        assert_eq!(stored.password_hash(), "hashed:salainen");
    }

    #[tokio::test]
    async fn test_created_user_json_has_no_password_hash() {
        let (service, _) = create_service();

        let user = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("id").is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let (service, storage) = create_service();

        let result = service.create(request("root", "Superuser", "salainen")).await;

        assert_eq!(result, Err(DomainError::uniqueness("username", "root")));
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_username_too_short() {
        let (service, storage) = create_service();

        let result = service.create(request("ab", "Test User", "salainen")).await;

        assert!(matches!(result, Err(DomainError::Validation { ref field, .. }) if field == "username"));
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_username_missing() {
        let (service, _) = create_service();

        let result = service
            .create(CreateUserRequest {
                username: None,
                name: Some("Test User".to_string()),
                password: Some("salainen".to_string()),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation { ref field, .. }) if field == "username"));
    }

    #[tokio::test]
    async fn test_create_password_rules() {
        let (service, storage) = create_service();

        let short = service.create(request("testuser", "Test User", "ab")).await;
        assert!(matches!(short, Err(DomainError::Validation { ref field, .. }) if field == "password"));

        let missing = service
            .create(CreateUserRequest {
                username: Some("testuser".to_string()),
                name: None,
                password: None,
            })
            .await;
        assert!(matches!(missing, Err(DomainError::Validation { ref field, .. }) if field == "password"));

        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_users() {
        let (service, _) = create_service();

        let users = service.list().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "root");
    }

    #[tokio::test]
    async fn test_get_user() {
        let (service, _) = create_service();
        let created = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        assert_eq!(service.get(created.id.as_str()).await.unwrap(), created);
        assert!(matches!(
            service.get("5a422a851b54a676234d17f7").await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.get("root").await,
            Err(DomainError::MalformedIdentifier { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_username_conflict() {
        let (service, _) = create_service();
        let created = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        let result = service
            .update(
                created.id.as_str(),
                UpdateUserRequest {
                    username: Some("root".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::UniquenessConflict { .. })));
    }

    #[tokio::test]
    async fn test_update_same_username_is_not_a_conflict() {
        let (service, _) = create_service();
        let created = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        let updated = service
            .update(
                created.id.as_str(),
                UpdateUserRequest {
                    username: Some("mluukkai".to_string()),
                    name: Some("Matti L".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("Matti L"));
    }

    #[tokio::test]
    async fn test_update_password() {
        let (service, _) = create_service();
        let created = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        service
            .update(
                created.id.as_str(),
                UpdateUserRequest {
                    password: Some("uusisala".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(service.authenticate("mluukkai", "salainen").await.unwrap().is_none());
        assert!(service.authenticate("mluukkai", "uusisala").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let (service, _) = create_service();

        let result = service
            .update("5a422a851b54a676234d17f7", UpdateUserRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (service, storage) = create_service();
        let root = storage.get_by_username("root").await.unwrap().unwrap();

        assert!(service.delete(root.id().as_str()).await.unwrap());
        assert!(!service.delete(root.id().as_str()).await.unwrap());
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_authenticate() {
        let (service, _) = create_service();

        let user = service.authenticate("root", "sekret").await.unwrap();
        assert_eq!(user.map(|u| u.username), Some("root".to_string()));

        assert!(service.authenticate("root", "wrong").await.unwrap().is_none());
        assert!(service.authenticate("nobody", "sekret").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_hasher_failure_stops_create() {
        let storage = Arc::new(InMemoryStorage::<User>::new());
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(DomainError::internal("hashing failed")));

        let service = UserService::new(storage.clone(), Arc::new(hasher));

        let error = service
            .create(request("mluukkai", "Matti", "salainen"))
            .await
            .unwrap_err();
        assert_eq!(error.class(), crate::domain::ErrorClass::Internal);
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let storage = Arc::new(MockStorage::<User>::new().with_error("connection refused"));
        let service = UserService::new(storage, Arc::new(fake_hasher()));

        let result = service.create(request("mluukkai", "Matti", "salainen")).await;
        assert_eq!(result, Err(DomainError::storage("connection refused")));
    }

    /// User store that yields to the scheduler after every read
    #[derive(Debug, Default)]
    struct YieldingUsers {
        inner: InMemoryStorage<User>,
    }

    #[async_trait::async_trait]
    impl Storage<User> for YieldingUsers {
        async fn list(&self) -> Result<Vec<User>, DomainError> {
            let users = self.inner.list().await;
            tokio::task::yield_now().await;
            users
        }

        async fn get(&self, key: &crate::domain::RecordId) -> Result<Option<User>, DomainError> {
            let user = self.inner.get(key).await;
            tokio::task::yield_now().await;
            user
        }

        async fn insert(&self, entity: User) -> Result<User, DomainError> {
            self.inner.insert(entity).await
        }

        async fn replace(&self, entity: User) -> Result<Option<User>, DomainError> {
            self.inner.replace(entity).await
        }

        async fn delete(&self, key: &crate::domain::RecordId) -> Result<bool, DomainError> {
            self.inner.delete(key).await
        }
    }

    #[async_trait::async_trait]
    impl UserRepository for YieldingUsers {
        async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            let user = self.inner.get_by_username(username).await;
            tokio::task::yield_now().await;
            user
        }

        async fn insert_unique(&self, user: User) -> Result<User, DomainError> {
            self.inner.insert_unique(user).await
        }

        async fn replace_unique(&self, user: User) -> Result<Option<User>, DomainError> {
            self.inner.replace_unique(user).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_username() {
        let storage = Arc::new(YieldingUsers::default());
        let service = UserService::new(storage.clone(), Arc::new(fake_hasher()));

        let (first, second) = tokio::join!(
            service.create(request("mluukkai", "Matti", "salainen")),
            service.create(request("mluukkai", "Matti", "salainen")),
        );

        assert!(first.is_ok() != second.is_ok());
        assert!(matches!(
            first.err().or(second.err()),
            Some(DomainError::UniquenessConflict { .. })
        ));
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_bumps_version_once() {
        let (service, storage) = create_service();
        let created = service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        service
            .update(
                created.id.as_str(),
                UpdateUserRequest {
                    username: Some("mluukkai2".to_string()),
                    name: Some("Matti L".to_string()),
                    password: Some("uusisala".to_string()),
                },
            )
            .await
            .unwrap();

        let stored = storage.get(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.meta().version(), 1);
    }

    #[tokio::test]
    async fn test_with_argon2() {
        let storage = Arc::new(InMemoryStorage::<User>::new());
        let service = UserService::new(storage.clone(), Arc::new(Argon2Hasher::new()));

        service
            .create(request("mluukkai", "Matti Luukkainen", "salainen"))
            .await
            .unwrap();

        let stored = storage.get_by_username("mluukkai").await.unwrap().unwrap();
        assert_ne!(stored.password_hash(), "salainen");
        assert!(service.authenticate("mluukkai", "salainen").await.unwrap().is_some());
    }
}
