//! Contact display formatting
//!
//! Formats contacts and birthday notifications for terminal output.

use crate::models::{Notification, Record};

/// One contact per line, or a placeholder for an empty book
pub fn format_contact_list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No contacts found.".to_string();
    }

    records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A contact's phones, or a note that it has none
pub fn format_phones(record: &Record) -> String {
    if record.phones().is_empty() {
        format!("Contact '{}' has no phone numbers.", record.name())
    } else {
        record.phones_joined()
    }
}

/// `name - YYYY.MM.DD` lines for upcoming birthdays
pub fn format_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    notifications
        .iter()
        .map(|n| format!("{} - {}", n.name, n.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_contact_list(&[]), "No contacts found.");
    }

    #[test]
    fn test_contact_list() {
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("1111111111").unwrap();
        alice.add_birthday("15.06.2000").unwrap();
        let bob = Record::new("Bob").unwrap();

        let output = format_contact_list(&[&alice, &bob]);
        assert_eq!(
            output,
            "Contact name: Alice, phones: 1111111111, birthday: 15.06.2000\n\
             Contact name: Bob, phones: , birthday: N/A"
        );
    }

    #[test]
    fn test_phones() {
        let mut record = Record::new("Alice").unwrap();
        assert_eq!(format_phones(&record), "Contact 'Alice' has no phone numbers.");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(format_phones(&record), "1111111111; 2222222222");
    }

    #[test]
    fn test_notifications() {
        assert_eq!(format_notifications(&[]), "No upcoming birthdays.");

        let notifications = vec![Notification {
            name: "Alice".to_string(),
            congratulation_date: "2024.06.17".to_string(),
        }];
        assert_eq!(format_notifications(&notifications), "Alice - 2024.06.17");
    }
}
