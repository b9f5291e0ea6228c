//! Storage layer for the contact manager
//!
//! Loads the whole address book at startup and writes it back in full on
//! exit, using atomic JSON writes. Also owns the audit logger and the backup
//! manager so every persistence side effect goes through one place.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use serde::{Deserialize, Serialize};

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::backup::BackupManager;
use crate::config::paths::ContactsPaths;
use crate::config::settings::Settings;
use crate::error::ContactsError;
use crate::models::{AddressBook, Record};

/// Serializable address book file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AddressBookData {
    contacts: Vec<Record>,
}

/// Main storage coordinator
pub struct Storage {
    paths: ContactsPaths,
    audit: Option<AuditLogger>,
    backups: BackupManager,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: ContactsPaths, settings: &Settings) -> Result<Self, ContactsError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            audit,
            backups: BackupManager::new(paths.clone(), settings.backup_retention.clone()),
            paths,
        })
    }

    pub fn paths(&self) -> &ContactsPaths {
        &self.paths
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    /// Read the address book, failing on unreadable or malformed files
    ///
    /// A missing file yields an empty book. Every record is re-keyed by its
    /// own name; if the file lists a name twice the last entry wins.
    pub fn try_load_address_book(&self) -> Result<AddressBook, ContactsError> {
        let data: AddressBookData = read_json(self.paths.address_book_file())?;

        let mut book = AddressBook::new();
        for record in data.contacts {
            book.add_record(record);
        }
        Ok(book)
    }

    /// Read the address book, starting empty if the file can't be loaded
    ///
    /// Returns the load error alongside the empty book so the caller can
    /// warn the user.
    pub fn load_address_book(&self) -> (AddressBook, Option<ContactsError>) {
        match self.try_load_address_book() {
            Ok(book) => (book, None),
            Err(err) => (AddressBook::new(), Some(err)),
        }
    }

    /// Write the full address book, backing up the previous file first
    ///
    /// The previous file is never overwritten without a copy: if the backup
    /// can't be written the save fails. Pruning old backups is best effort.
    pub fn save_address_book(&self, book: &AddressBook) -> Result<(), ContactsError> {
        if self.paths.address_book_file().exists() {
            self.backups.create_backup()?;
            let _ = self.backups.enforce_retention();
        }

        let data = AddressBookData {
            contacts: book.records().into_iter().cloned().collect(),
        };
        write_json_atomic(self.paths.address_book_file(), &data)
    }

    /// Record a newly created contact
    pub fn log_create(&self, record: &Record) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                EntityType::Contact,
                record.name().as_str(),
                record,
            )),
            None => Ok(()),
        }
    }

    /// Record a change to an existing contact
    pub fn log_update(&self, before: &Record, after: &Record) -> Result<(), ContactsError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(before), Ok(after)) => generate_diff(&before, &after),
            _ => None,
        };

        logger.log(&AuditEntry::update(
            EntityType::Contact,
            after.name().as_str(),
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted contact
    pub fn log_delete(&self, record: &Record) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                EntityType::Contact,
                record.name().as_str(),
                record,
            )),
            None => Ok(()),
        }
    }
}
