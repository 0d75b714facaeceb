//! Record lifecycle services
//!
//! One service per entity kind. Each parses identifiers before touching
//! storage, validates writes, and hands back normalized views.

mod blog_service;
mod person_service;
mod user_service;

pub use blog_service::{BlogService, CreateBlogRequest, UpdateBlogRequest};
pub use person_service::{CreatePersonRequest, PersonService, UpdatePersonRequest};
pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};

use crate::domain::{DomainError, RecordId};

/// Parse a caller-supplied identifier, rejecting malformed input up front
fn parse_id(id: &str) -> Result<RecordId, DomainError> {
    Ok(RecordId::new(id)?)
}
