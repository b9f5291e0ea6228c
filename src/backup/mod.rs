//! Backup system for the contact manager
//!
//! Before the address book file is overwritten, the previous version is
//! copied to `backups/backup-YYYYMMDD-HHMMSS-mmm.json`. Only the newest
//! `backup_retention.count` copies are kept.

pub mod manager;

pub use manager::{BackupInfo, BackupManager};
