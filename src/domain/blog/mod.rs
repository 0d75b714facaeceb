//! Blog list domain

mod entity;
mod validation;

pub use entity::{Blog, BlogView};
pub use validation::validate_blog;
