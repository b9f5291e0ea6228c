//! Session command parsing
//!
//! Turns one input line into a `Command`. The first whitespace-separated
//! word selects the command (case-insensitively); the remaining words are
//! its arguments, which must match the command's arity exactly.

use crate::error::{ContactsError, ContactsResult};

/// Every command word the session understands, in help order
pub const COMMAND_NAMES: &[&str] = &[
    "hello",
    "add",
    "change",
    "phone",
    "all",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "delete",
    "close",
    "exit",
];

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Parse an input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> ContactsResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let keyword = word.to_lowercase();
        let command = match keyword.as_str() {
            "hello" => {
                let [] = take_args::<0>(&args, "hello")?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = take_args::<2>(&args, "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = take_args::<2>(&args, "change <name> <phone>")?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = take_args::<1>(&args, "phone <name>")?;
                Command::Phone { name }
            }
            "all" => {
                let [] = take_args::<0>(&args, "all")?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] = take_args::<2>(&args, "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(&args, "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                let [] = take_args::<0>(&args, "birthdays")?;
                Command::Birthdays
            }
            "delete" => {
                let [name] = take_args::<1>(&args, "delete <name>")?;
                Command::Delete { name }
            }
            "close" | "exit" => {
                let [] = take_args::<0>(&args, &keyword)?;
                Command::Exit
            }
            _ => return Err(ContactsError::unknown_command(word)),
        };

        Ok(Some(command))
    }
}

/// Exactly `N` arguments, or a usage error for the command
fn take_args<const N: usize>(args: &[&str], usage: &str) -> ContactsResult<[String; N]> {
    <[&str; N]>::try_from(args)
        .map(|args| args.map(String::from))
        .map_err(|_| ContactsError::Usage(usage.to_string()))
}
