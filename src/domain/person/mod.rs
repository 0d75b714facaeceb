//! Phonebook domain
//!
//! Entries pair a name with a phone number. Names are not unique.

mod entity;
mod validation;

pub use entity::{Person, PersonView, PhonebookInfo};
pub use validation::{validate_person, MIN_NAME_LENGTH};
