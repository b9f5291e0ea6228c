//! Core data models for the contact manager
//!
//! Validated field types, the contact `Record`, and the `AddressBook` with
//! its upcoming-birthday computation.

pub mod address_book;
pub mod fields;
pub mod record;

pub use address_book::{AddressBook, Notification, DEFAULT_DAYS_AHEAD};
pub use fields::{Birthday, FieldValidationError, Name, Phone};
pub use record::Record;
