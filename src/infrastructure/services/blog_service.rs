//! Blog service - blog list lifecycle and statistics

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::storage::Storage;
use crate::domain::{validate_blog, Blog, BlogStatistics, BlogView, DomainError, Normalize};

use super::parse_id;

/// Request to create a new blog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    /// Identifier of the creating user
    pub user: Option<String>,
}

/// Partial update of a blog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub user: Option<String>,
}

/// Blog service for CRUD operations
#[derive(Debug)]
pub struct BlogService<S: Storage<Blog>> {
    storage: Arc<S>,
}

impl<S: Storage<Blog>> BlogService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// List all blogs in storage order
    pub async fn list(&self) -> Result<Vec<BlogView>, DomainError> {
        let blogs = self.storage.list().await?;
        Ok(blogs.iter().map(Normalize::normalize).collect())
    }

    /// Blogs created by the given user
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<BlogView>, DomainError> {
        let user_id = parse_id(user_id)?;
        let blogs = self.storage.list().await?;

        Ok(blogs
            .iter()
            .filter(|b| b.is_owned_by(&user_id))
            .map(Normalize::normalize)
            .collect())
    }

    /// Get a blog by ID
    pub async fn get(&self, id: &str) -> Result<BlogView, DomainError> {
        let blog_id = parse_id(id)?;

        self.storage
            .get(&blog_id)
            .await?
            .map(|b| b.normalize())
            .ok_or_else(|| DomainError::not_found(format!("Blog '{}' not found", id)))
    }

    /// Create a new blog; likes default to zero
    pub async fn create(&self, request: CreateBlogRequest) -> Result<BlogView, DomainError> {
        let (title, url) = validate_blog(request.title.as_deref(), request.url.as_deref())?;

        let mut blog = Blog::new(
            title,
            request.author.clone(),
            url,
            request.likes.unwrap_or_default(),
        );

        if let Some(ref user) = request.user {
            blog = blog.with_user(parse_id(user)?);
        }

        let blog = self.storage.insert(blog).await?;
        Ok(blog.normalize())
    }

    /// Apply the fields present in the request to an existing blog
    pub async fn update(&self, id: &str, request: UpdateBlogRequest) -> Result<BlogView, DomainError> {
        let blog_id = parse_id(id)?;
        let user = request.user.as_deref().map(parse_id).transpose()?;

        let mut blog = self
            .storage
            .get(&blog_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Blog '{}' not found", id)))?;

        if let Some(title) = request.title {
            blog.set_title(title);
        }

        if let Some(author) = request.author {
            blog.set_author(Some(author));
        }

        if let Some(url) = request.url {
            blog.set_url(url);
        }

        if let Some(likes) = request.likes {
            blog.set_likes(likes);
        }

        if user.is_some() {
            blog.set_user(user);
        }

        validate_blog(Some(blog.title()), Some(blog.url()))?;

        self.save(blog, id).await
    }

    /// Add one like to a blog
    pub async fn like(&self, id: &str) -> Result<BlogView, DomainError> {
        let blog_id = parse_id(id)?;

        let mut blog = self
            .storage
            .get(&blog_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Blog '{}' not found", id)))?;

        blog.like();
        self.save(blog, id).await
    }

    /// Delete a blog by ID, returns false if it was already gone
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let blog_id = parse_id(id)?;
        self.storage.delete(&blog_id).await
    }

    /// Delete a blog on behalf of a user
    ///
    /// Only the user the blog references may remove it.
    pub async fn delete_as(&self, id: &str, acting_user: &str) -> Result<bool, DomainError> {
        let blog_id = parse_id(id)?;
        let user_id = parse_id(acting_user)?;

        let Some(blog) = self.storage.get(&blog_id).await? else {
            return Ok(false);
        };

        if !blog.is_owned_by(&user_id) {
            return Err(DomainError::forbidden(format!(
                "Blog '{}' can only be deleted by its creator",
                id
            )));
        }

        self.storage.delete(&blog_id).await
    }

    /// Aggregate statistics over every stored blog
    pub async fn statistics(&self) -> Result<BlogStatistics, DomainError> {
        let blogs = self.storage.list().await?;
        Ok(BlogStatistics::compute(&blogs))
    }

    async fn save(&self, mut blog: Blog, id: &str) -> Result<BlogView, DomainError> {
        blog.touch();

        // the blog may have been removed since it was read
        self.storage
            .replace(blog)
            .await?
            .map(|b| b.normalize())
            .ok_or_else(|| DomainError::not_found(format!("Blog '{}' not found", id)))
    }
}
