//! Configuration module for the contact manager
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactsPaths;
pub use settings::Settings;
