//! Domain layer - Entities, validation, normalization and statistics

pub mod blog;
pub mod error;
pub mod id;
pub mod normalize;
pub mod person;
pub mod record;
pub mod stats;
pub mod storage;
pub mod user;
pub mod validation;

pub use blog::{validate_blog, Blog, BlogView};
pub use error::{DomainError, ErrorClass};
pub use id::{IdError, RecordId};
pub use normalize::{normalize_document, normalize_documents, EntityKind, Normalize};
pub use person::{validate_person, Person, PersonView, PhonebookInfo};
pub use record::RecordMeta;
pub use stats::{
    favorite_blog, most_blogs, most_likes, sort_by_likes, total_likes, AuthorBlogCount,
    AuthorLikes, BlogMetrics, BlogStatistics, FavoriteBlog,
};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use user::{validate_password, validate_username, User, UserRepository, UserView};
pub use validation::{
    is_valid_phone_number, validate_min_length, validate_phone_number, validate_required,
    FieldValidationError,
};
