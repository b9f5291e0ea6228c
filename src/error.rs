//! Custom error types for the contact manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant renders to a single line so
//! the interactive session can print it directly.

use thiserror::Error;

/// The main error type for contact manager operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Bad name, phone or birthday format
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Wrong argument count or shape for a command
    #[error("Usage: {0}")]
    Usage(String),

    /// Command word not recognized
    #[error("Invalid command '{command}'. Available commands: {available}")]
    UnknownCommand { command: String, available: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for phone numbers
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a contact without a birthday
    pub fn birthday_not_set(contact: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Birthday",
            identifier: contact.into(),
        }
    }

    /// Create an "unknown command" error listing every valid command
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
            available: crate::cli::COMMAND_NAMES.join(", "),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact manager operations
pub type ContactsResult<T> = Result<T, ContactsError>;
