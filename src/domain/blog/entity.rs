//! Blog entity and its external view

use serde::{Deserialize, Serialize};

use crate::domain::normalize::Normalize;
use crate::domain::record::RecordMeta;
use crate::domain::storage::StorageEntity;
use crate::domain::RecordId;

/// Persisted blog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    id: RecordId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    url: String,
    #[serde(default)]
    likes: u64,
    /// Creator reference, non-owning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<RecordId>,
    #[serde(flatten)]
    meta: RecordMeta,
}

impl Blog {
    /// Create a new blog with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        author: Option<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            author,
            url: url.into(),
            likes,
            user: None,
            meta: RecordMeta::new(),
        }
    }

    /// Use a specific identifier
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Attach the creating user
    pub fn with_user(mut self, user: RecordId) -> Self {
        self.user = Some(user);
        self
    }

    // Getters

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn user(&self) -> Option<&RecordId> {
        self.user.as_ref()
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    /// Whether the blog was created by the given user
    pub fn is_owned_by(&self, user: &RecordId) -> bool {
        self.user.as_ref() == Some(user)
    }

    // Mutators

    /// Record one successful write in the metadata
    pub fn touch(&mut self) {
        self.meta.touch();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = author;
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_likes(&mut self, likes: u64) {
        self.likes = likes;
    }

    pub fn set_user(&mut self, user: Option<RecordId>) {
        self.user = user;
    }

    /// Add one like
    pub fn like(&mut self) {
        self.set_likes(self.likes.saturating_add(1));
    }
}

impl StorageEntity for Blog {
    type Key = RecordId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// External representation of a blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogView {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

impl Normalize for Blog {
    type View = BlogView;

    fn normalize(&self) -> BlogView {
        BlogView {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
            user: self.user.clone(),
        }
    }
}
