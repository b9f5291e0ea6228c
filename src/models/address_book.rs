//! Address book and upcoming-birthday notifications
//!
//! The address book maps each contact name to its `Record`. It only exposes
//! keyed operations, so every stored record is always keyed by its own name.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::record::Record;

/// Default size of the upcoming-birthday window, in days
pub const DEFAULT_DAYS_AHEAD: u32 = 7;

/// Output format for congratulation dates
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// An upcoming birthday worth congratulating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub name: String,
    /// Birthday occurrence moved off weekends, formatted `YYYY.MM.DD`
    pub congratulation_date: String,
}

/// Collection of contacts keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any previous one
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-match lookup
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup for in-place edits
    ///
    /// Callers must not change the record's name through this reference;
    /// `Record` exposes no setter for it.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, returning it if it was present
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted by name
    pub fn records(&self) -> Vec<&Record> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        records
    }

    /// Upcoming birthdays relative to the local date
    pub fn get_upcoming_birthdays(&self, days_ahead: u32) -> Vec<Notification> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days_ahead)
    }

    /// Birthdays whose next occurrence falls in `[today, today + days_ahead)`
    ///
    /// Works on calendar dates only, so a birthday today is always included
    /// and one exactly `days_ahead` days away never is. Occurrences landing
    /// on a weekend are congratulated on the following Monday. Contacts
    /// without a birthday are skipped. The result is in no particular order.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days_ahead: u32) -> Vec<Notification> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let occurrence = next_occurrence(birthday, today);
                let days_until = (occurrence - today).num_days();

                if days_until < 0 || days_until >= i64::from(days_ahead) {
                    return None;
                }

                Some(Notification {
                    name: record.name().as_str().to_string(),
                    congratulation_date: congratulation_date(occurrence)
                        .format(CONGRATULATION_DATE_FORMAT)
                        .to_string(),
                })
            })
            .collect()
    }
}

/// Month/day of `birthday` in `year`; 29 February falls back to the 28th
fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or(birthday)
}

/// This year's occurrence, or next year's if it has already passed
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Shift a weekend date to the following Monday
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}
