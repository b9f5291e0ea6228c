//! Backup manager for the address book
//!
//! Keeps rolling, timestamped copies of the address book file. A backup is
//! taken right before the file is overwritten, so the previous session's
//! state can always be recovered by hand. Backups are byte-for-byte copies:
//! a file that no longer parses is preserved exactly as it was.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::paths::ContactsPaths;
use crate::config::settings::BackupRetention;
use crate::error::{ContactsError, ContactsResult};

/// Filename timestamp, `backup-YYYYMMDD-HHMMSS-mmm.json`
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S-%3f";

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    paths: ContactsPaths,
    retention: BackupRetention,
}

impl BackupManager {
    pub fn new(paths: ContactsPaths, retention: BackupRetention) -> Self {
        let backup_dir = paths.backup_dir();
        Self {
            backup_dir,
            paths,
            retention,
        }
    }

    /// Copy the current address book file into the backup directory
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> ContactsResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ContactsError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let filename = format!("backup-{}.json", Utc::now().format(TIMESTAMP_FORMAT));
        let backup_path = self.backup_dir.join(&filename);

        fs::copy(self.paths.address_book_file(), &backup_path)
            .map_err(|e| ContactsError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ContactsResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            ContactsError::Io(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                ContactsError::Io(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });

        Ok(backups)
    }

    /// Delete all but the newest `retention.count` backups
    pub fn enforce_retention(&self) -> ContactsResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.count as usize)
        {
            fs::remove_file(&backup.path).map_err(|e| {
                ContactsError::Io(format!("Failed to delete old backup: {}", e))
            })?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

/// Build backup info from a `backup-YYYYMMDD-HHMMSS-mmm.json` path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse a backup timestamp from the filename date part
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(date_str, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
