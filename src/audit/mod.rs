//! Audit logging for contact changes
//!
//! Records every create, update and delete performed through the command
//! layer in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, contact name,
//!   and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.
//! - `generate_diff`: summarizes the fields that changed in an update.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
