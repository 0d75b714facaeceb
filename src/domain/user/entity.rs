//! User entity and its external view

use serde::{Deserialize, Serialize};

use crate::domain::normalize::Normalize;
use crate::domain::record::RecordMeta;
use crate::domain::storage::StorageEntity;
use crate::domain::RecordId;

/// Persisted user account
///
/// The stored document carries the password hash. It is only ever handed out
/// through [`UserView`], which has no field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    id: RecordId,
    username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    password_hash: String,
    #[serde(flatten)]
    meta: RecordMeta,
}

impl User {
    /// Create a new user with a freshly generated identifier
    pub fn new(
        username: impl Into<String>,
        name: Option<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            username: username.into(),
            name,
            password_hash: password_hash.into(),
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

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    // Mutators

    /// Record one successful write in the metadata
    pub fn touch(&mut self) {
        self.meta.touch();
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }
}

impl StorageEntity for User {
    type Key = RecordId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// External representation of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: RecordId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Normalize for User {
    type View = UserView;

    fn normalize(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }
}
