//! Contact service
//!
//! Business logic behind every session command: creating contacts, editing
//! phones and birthdays, and reporting upcoming birthdays. Mutations are
//! applied to the in-memory address book first and then audited.

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Birthday, Notification, Record};
use crate::storage::Storage;

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    pub fn new(storage: &'a Storage, book: &'a mut AddressBook) -> Self {
        Self { storage, book }
    }

    /// Create a contact with one phone number
    ///
    /// Refuses to replace an existing contact of the same name.
    pub fn add(&mut self, name: &str, phone: &str) -> ContactsResult<Record> {
        if self.book.find(name).is_some() {
            return Err(ContactsError::Duplicate {
                entity_type: "Contact",
                identifier: name.to_string(),
            });
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;

        self.book.add_record(record.clone());
        self.storage.log_create(&record)?;

        Ok(record)
    }

    /// Replace the contact's first phone, or add one if it has none
    pub fn change_phone(&mut self, name: &str, phone: &str) -> ContactsResult<Record> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;

        let before = record.clone();
        match before.phones().first() {
            Some(first) => record.edit_phone(first.as_str(), phone)?,
            None => record.add_phone(phone)?,
        }

        let after = record.clone();
        self.storage.log_update(&before, &after)?;

        Ok(after)
    }

    /// Look up a contact by exact name
    pub fn find(&self, name: &str) -> ContactsResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    /// Set or replace a contact's birthday
    pub fn set_birthday(&mut self, name: &str, date: &str) -> ContactsResult<Record> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;

        let before = record.clone();
        record.add_birthday(date)?;

        let after = record.clone();
        self.storage.log_update(&before, &after)?;

        Ok(after)
    }

    /// A contact's birthday
    pub fn birthday(&self, name: &str) -> ContactsResult<Birthday> {
        self.find(name)?
            .birthday()
            .copied()
            .ok_or_else(|| ContactsError::birthday_not_set(name))
    }

    /// Remove a contact
    pub fn delete(&mut self, name: &str) -> ContactsResult<Record> {
        let record = self
            .book
            .delete(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;

        self.storage.log_delete(&record)?;

        Ok(record)
    }

    /// All contacts, sorted by name
    pub fn list(&self) -> Vec<&Record> {
        self.book.records()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Upcoming birthdays sorted by congratulation date, then name
    pub fn upcoming_birthdays(&self, days_ahead: u32) -> Vec<Notification> {
        sorted(self.book.get_upcoming_birthdays(days_ahead))
    }
}

/// `YYYY.MM.DD` sorts chronologically as a string
fn sorted(mut notifications: Vec<Notification>) -> Vec<Notification> {
    notifications.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{ContactsPaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_contact() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        let record = service.add("Alice", "1234567890").unwrap();
        assert_eq!(record.phones_joined(), "1234567890");
        assert!(service.find("Alice").is_ok());
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        service.add("Alice", "1234567890").unwrap();
        let err = service.add("Alice", "0987654321").unwrap_err();
        assert!(matches!(err, ContactsError::Duplicate { .. }));
        assert_eq!(service.find("Alice").unwrap().phones_joined(), "1234567890");
    }

    #[test]
    fn test_add_invalid_phone_stores_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        assert!(service.add("Alice", "12-34").unwrap_err().is_validation());
        assert!(service.is_empty());
    }

    #[test]
    fn test_change_phone() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        service.add("Alice", "1234567890").unwrap();
        let record = service.change_phone("Alice", "0987654321").unwrap();
        assert_eq!(record.phones_joined(), "0987654321");

        assert!(service
            .change_phone("Bob", "0987654321")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_change_phone_on_contact_without_phones() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());
        let mut service = ContactService::new(&storage, &mut book);

        let record = service.change_phone("Alice", "1234567890").unwrap();
        assert_eq!(record.phones_joined(), "1234567890");
    }

    #[test]
    fn test_birthday_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        service.add("Alice", "1234567890").unwrap();
        assert!(service.birthday("Alice").unwrap_err().is_not_found());

        service.set_birthday("Alice", "15.06.2000").unwrap();
        assert_eq!(service.birthday("Alice").unwrap().to_string(), "15.06.2000");

        assert!(service
            .set_birthday("Alice", "2000.06.15")
            .unwrap_err()
            .is_validation());
        assert!(service
            .set_birthday("Nobody", "15.06.2000")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        service.add("Alice", "1234567890").unwrap();
        service.delete("Alice").unwrap();
        assert!(service.is_empty());
        assert!(service.delete("Alice").unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&storage, &mut book);

        service.add("Alice", "1234567890").unwrap();
        service.change_phone("Alice", "0987654321").unwrap();
        service.set_birthday("Alice", "15.06.2000").unwrap();
        service.delete("Alice").unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![
                Operation::Create,
                Operation::Update,
                Operation::Update,
                Operation::Delete
            ]
        );
        assert!(entries.iter().all(|e| e.entity_id == "Alice"));
    }

    #[test]
    fn test_notifications_sorted() {
        let notifications = sorted(vec![
            Notification {
                name: "Zed".to_string(),
                congratulation_date: "2024.06.12".to_string(),
            },
            Notification {
                name: "Bob".to_string(),
                congratulation_date: "2024.06.17".to_string(),
            },
            Notification {
                name: "Amy".to_string(),
                congratulation_date: "2024.06.17".to_string(),
            },
        ]);

        let names: Vec<_> = notifications.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Bob"]);
    }
}
