//! Command layer
//!
//! Parses session input into commands and runs them through the service
//! layer, converting every error into a message for the user.

pub mod command;
pub mod session;

pub use command::{Command, COMMAND_NAMES};
pub use session::{error_message, Flow, Session};
