//! contacts - Terminal-based contact manager
//!
//! This library provides the core functionality for the contact manager: an
//! address book of names, phone numbers and birthdays, plus the computation of
//! which contacts have a birthday coming up (moved off weekends to Monday).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Field value types, contact records and the address book
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `backup`: Rolling backups of the address book file
//! - `cli`: Interactive command session
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::models::{AddressBook, Record};
//!
//! let mut record = Record::new("Alice")?;
//! record.add_phone("1234567890")?;
//! record.add_birthday("15.06.2000")?;
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! for notification in book.get_upcoming_birthdays(7) {
//!     println!("{} - {}", notification.name, notification.congratulation_date);
//! }
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
