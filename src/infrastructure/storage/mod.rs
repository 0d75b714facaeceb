//! Storage infrastructure - Storage implementations

mod in_memory;
mod seed;

pub use in_memory::InMemoryStorage;
pub use seed::{ensure_unique_usernames, load_documents, parse_documents};
