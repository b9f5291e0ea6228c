//! Service layer for the contact manager
//!
//! The service layer provides business logic on top of the address book and
//! storage, handling lookups, duplicate checks and audit logging.

pub mod contact;

pub use contact::ContactService;
