//! Contact record
//!
//! One contact: a name, an ordered list of phone numbers and an optional
//! birthday. Records are created from a name and then mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactsError, ContactsResult};

/// Placeholder shown when a contact has no birthday
pub const NO_BIRTHDAY: &str = "N/A";

/// A single contact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the address book key
    name: Name,

    /// Phone numbers in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: &str) -> ContactsResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> ContactsResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`; absent numbers are ignored
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// Fails with a not-found error if no phone matches `old`, and with a
    /// validation error if `new` is malformed. The list is untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| ContactsError::phone_not_found(old))?;

        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// First phone equal to `phone`
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> ContactsResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Phone numbers joined with `"; "`
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => NO_BIRTHDAY.to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_joined(),
            birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());

        assert!(Record::new(" ").unwrap_err().is_validation());
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let record = record_with_phones(&["1234567890", "1234567890"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone() {
        let mut record = Record::new("John").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert!(err.is_validation());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111");
        assert_eq!(record.phones_joined(), "2222222222");

        // Absent number is a no-op
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(record.phones_joined(), "3333333333; 2222222222; 1111111111");
    }

    #[test]
    fn test_edit_missing_phone_leaves_list_unchanged() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        let before = record.clone();

        let err = record.edit_phone("5555555555", "3333333333").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_validates_new_value() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record.phones_joined(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

        assert!(record.add_birthday("1992-02-02").unwrap_err().is_validation());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_display() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday: N/A"
        );

        record.add_birthday("5.3.1985").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday: 05.03.1985"
        );
    }

    #[test]
    fn test_serialization() {
        let mut record = record_with_phones(&["1111111111"]);
        record.add_birthday("15.06.2000").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2000-06-15\""));

        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
