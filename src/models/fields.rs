//! Validated contact fields
//!
//! `Name`, `Phone` and `Birthday` are value types: construction either yields
//! a well-formed value or a `FieldValidationError`, so a `Record` can never
//! hold malformed data. Serde goes through the same constructors, which keeps
//! hand-edited or stale data files from smuggling invalid values in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactsError;

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Validation errors for contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidPhone(String),
    InvalidBirthday(String),
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(value) => {
                write!(f, "Phone number must be exactly 10 digits, got '{}'", value)
            }
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid date '{}'. Use DD.MM.YYYY", value)
            }
        }
    }
}

impl std::error::Error for FieldValidationError {}

impl From<FieldValidationError> for ContactsError {
    fn from(err: FieldValidationError) -> Self {
        ContactsError::Validation(err.to_string())
    }
}

/// A contact name: any string that is not empty or whitespace-only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten ASCII decimal digits, nothing else
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Number of digits a phone number must have
    pub const DIGITS: usize = 10;

    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.len() != Self::DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, parsed from `DD.MM.YYYY`
///
/// Stored on disk as an ISO date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string
    ///
    /// Day and month may omit the leading zero; the year must be four digits.
    /// Impossible calendar dates (31.04, 29.02 in a common year) are rejected.
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        let invalid = || FieldValidationError::InvalidBirthday(value.to_string());

        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let (day, month, year) = (parts[0], parts[1], parts[2]);
        if !all_digits(day) || day.len() > 2 || !all_digits(month) || month.len() > 2 {
            return Err(invalid());
        }
        if year.len() != 4 || !all_digits(year) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = FieldValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
