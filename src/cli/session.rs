//! Interactive session
//!
//! Reads one command per line, runs it against the in-memory address book
//! and prints a one-line (or one-block) reply. Errors never end the session;
//! only `close`/`exit` (or end of input) do, after the book is saved. At end
//! of input there is no way to retry, so a failed save is returned as an
//! error from `run`.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_contact_list, format_notifications, format_phones};
use crate::error::{ContactsError, ContactsResult};
use crate::models::AddressBook;
use crate::services::ContactService;
use crate::storage::Storage;

use super::command::Command;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Goodbye! Address book saved.";

/// What the session loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A running command session over one address book
pub struct Session<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    book: AddressBook,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, book: AddressBook) -> Self {
        Self {
            storage,
            settings,
            book,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run a parsed command, returning its reply
    pub fn execute(&mut self, command: Command) -> ContactsResult<(String, Flow)> {
        let upcoming_days = self.settings.upcoming_days;
        let mut service = ContactService::new(self.storage, &mut self.book);

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => {
                service.add(&name, &phone)?;
                format!("Contact '{}' added.", name)
            }
            Command::Change { name, phone } => {
                service.change_phone(&name, &phone)?;
                format!("Contact '{}' updated.", name)
            }
            Command::Phone { name } => format_phones(service.find(&name)?),
            Command::All => format_contact_list(&service.list()),
            Command::AddBirthday { name, date } => {
                service.set_birthday(&name, &date)?;
                format!("Birthday added for '{}'.", name)
            }
            Command::ShowBirthday { name } => service.birthday(&name)?.to_string(),
            Command::Birthdays => {
                if service.is_empty() {
                    "No contacts found.".to_string()
                } else {
                    format_notifications(&service.upcoming_birthdays(upcoming_days))
                }
            }
            Command::Delete { name } => {
                service.delete(&name)?;
                format!("Contact '{}' deleted.", name)
            }
            Command::Exit => {
                self.storage.save_address_book(&self.book)?;
                return Ok((GOODBYE.to_string(), Flow::Exit));
            }
        };

        Ok((reply, Flow::Continue))
    }

    /// Parse and run one input line
    ///
    /// Blank lines produce no reply. Errors become the reply text.
    pub fn handle_line(&mut self, line: &str) -> (Option<String>, Flow) {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command).map(|(reply, flow)| (Some(reply), flow)),
            None => Ok((None, Flow::Continue)),
        });

        match result {
            Ok(outcome) => outcome,
            Err(err) => (Some(error_message(&err)), Flow::Continue),
        }
    }

    /// Drive the session until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> ContactsResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                // End of input behaves like `exit`
                writeln!(output)?;
                return match self.execute(Command::Exit) {
                    Ok((reply, _)) => {
                        writeln!(output, "{}", reply)?;
                        Ok(())
                    }
                    Err(err) => {
                        writeln!(output, "{}", error_message(&err))?;
                        Err(err)
                    }
                };
            };

            let (reply, flow) = self.handle_line(&line?);
            if let Some(reply) = reply {
                writeln!(output, "{}", reply)?;
            }
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }
}

/// One-line message shown to the user for a failed command
pub fn error_message(err: &ContactsError) -> String {
    match err {
        ContactsError::Usage(_)
        | ContactsError::UnknownCommand { .. }
        | ContactsError::Validation(_)
        | ContactsError::NotFound { .. }
        | ContactsError::Duplicate { .. } => err.to_string(),
        ContactsError::Config(_)
        | ContactsError::Io(_)
        | ContactsError::Json(_)
        | ContactsError::Storage(_) => format!("Error: {}", err),
    }
}
