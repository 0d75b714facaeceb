//! User domain
//!
//! This module provides the user entity, its credential rules and the
//! repository trait carrying the username uniqueness check.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserView};
pub use repository::UserRepository;
pub use validation::{
    validate_password, validate_username, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
