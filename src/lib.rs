//! Blog list and phonebook record engine
//!
//! Validation, normalization, aggregation and lifecycle handling for:
//! - Phonebook entries with checked phone numbers
//! - Users with unique usernames and hashed passwords
//! - Blogs with likes, creator references and list statistics

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use config::StorageConfig;
use domain::{Blog, DomainError, Person, User};
use infrastructure::{
    password::Argon2Hasher,
    services::{BlogService, PersonService, UserService},
    storage::{ensure_unique_usernames, load_documents, InMemoryStorage},
};

/// Services wired to in-memory stores
#[derive(Debug)]
pub struct AppServices {
    pub blogs: BlogService<InMemoryStorage<Blog>>,
    pub persons: PersonService<InMemoryStorage<Person>>,
    pub users: UserService<InMemoryStorage<User>, Argon2Hasher>,
}

/// Create services with empty stores
pub fn create_services() -> AppServices {
    AppServices {
        blogs: BlogService::new(Arc::new(InMemoryStorage::new())),
        persons: PersonService::new(Arc::new(InMemoryStorage::new())),
        users: UserService::new(Arc::new(InMemoryStorage::new()), Arc::new(Argon2Hasher::new())),
    }
}

/// Create services whose stores are seeded from the configured exports
pub fn create_services_with_config(config: &StorageConfig) -> Result<AppServices, DomainError> {
    let blogs = seeded_storage::<Blog>(config.blogs_file.as_deref())?;
    let persons = seeded_storage::<Person>(config.persons_file.as_deref())?;
    let users = load_seed::<User>(config.users_file.as_deref())?;
    ensure_unique_usernames(&users)?;
    let users = Arc::new(InMemoryStorage::with_entities(users));

    Ok(AppServices {
        blogs: BlogService::new(blogs),
        persons: PersonService::new(persons),
        users: UserService::new(users, Arc::new(Argon2Hasher::new())),
    })
}

fn seeded_storage<E>(path: Option<&str>) -> Result<Arc<InMemoryStorage<E>>, DomainError>
where
    E: domain::StorageEntity,
{
    Ok(Arc::new(InMemoryStorage::with_entities(load_seed(path)?)))
}

fn load_seed<E: domain::StorageEntity>(path: Option<&str>) -> Result<Vec<E>, DomainError> {
    match path {
        Some(path) => load_documents(path),
        None => Ok(Vec::new()),
    }
}
