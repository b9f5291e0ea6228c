//! User settings for the contact manager
//!
//! Manages user preferences: the birthday reminder window, audit logging and
//! backup retention.

use serde::{Deserialize, Serialize};

use super::paths::ContactsPaths;
use crate::error::ContactsError;
use crate::models::DEFAULT_DAYS_AHEAD;

/// Backup retention settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of address book backups to keep
    pub count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self { count: 10 }
    }
}

/// User settings for the contact manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Size of the `birthdays` window in days
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Whether contact changes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,
}

fn default_schema_version() -> u32 {
    1
}

fn default_upcoming_days() -> u32 {
    DEFAULT_DAYS_AHEAD
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_days: default_upcoming_days(),
            audit_enabled: default_audit_enabled(),
            backup_retention: BackupRetention::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactsPaths) -> Result<(), ContactsError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ContactsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
