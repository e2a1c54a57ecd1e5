//! Command execution against the address book

use contactbook_book::{AddressBook, DEFAULT_WINDOW_DAYS};
use contactbook_diagnostics::{BookError, Result};
use contactbook_types::{Name, Phone, Record};

use crate::clock::{Clock, SystemClock};
use crate::command::{Command, parse_input};
use crate::help::HELP_TEXT;

pub const EMPTY_INPUT: &str = "Please enter a valid command. Write <help> to see all commands.";
pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const NO_CONTACTS: &str = "No contacts saved.";
pub const NO_BIRTHDAYS: &str = "No upcoming birthdays this week.";

const NAME_AND_PHONE: &str = "Give me name and phone please.";
const CHANGE_USAGE: &str = "Give me name, old phone and new phone please.";
const BIRTHDAY_USAGE: &str = "Please provide both name and birthday. Format: <name> <DD.MM.YYYY>";
const NAME_REQUIRED: &str = "Invalid input. Please provide the correct number of arguments.";

/// Outcome of one prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Message(String),
    /// The user asked to leave
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// The assistant bot: owns the book and answers commands
pub struct Assistant {
    book: AddressBook,
    clock: Box<dyn Clock + Send>,
    dirty: bool,
}

impl Assistant {
    pub fn new(book: AddressBook) -> Self {
        Self::with_clock(book, SystemClock)
    }

    pub fn with_clock(book: AddressBook, clock: impl Clock + Send + 'static) -> Self {
        Self {
            book,
            clock: Box::new(clock),
            dirty: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Whether the book changed since it was loaded or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Parse and run one prompt line
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Some((word, args)) => {
                let command = Command::from_word(&word);
                self.execute(&command, &args)
            }
            None => Reply::message(EMPTY_INPUT),
        }
    }

    /// Run a command, turning any error into the reply text
    pub fn execute(&mut self, command: &Command, args: &[String]) -> Reply {
        log::debug!("Executing `{}` with {} argument(s)", command, args.len());

        let result = match command {
            Command::Exit => return Reply::Exit,
            Command::Hello => Ok(GREETING.to_string()),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::RemovePhone => self.remove_phone(args),
            Command::Delete => self.delete_contact(args),
            Command::Unknown(word) => {
                log::debug!("Unknown command `{}`", word);
                Ok(INVALID_COMMAND.to_string())
            }
        };

        match result {
            Ok(text) => {
                if command.is_mutating() {
                    self.dirty = true;
                }
                Reply::Message(text)
            }
            Err(e) => {
                log::debug!("`{}` failed with {}: {}", command, e.code(), e);
                Reply::Message(e.to_string())
            }
        }
    }

    fn add_contact(&mut self, args: &[String]) -> Result<String> {
        let [name, phone] = args else {
            return Err(BookError::usage(NAME_AND_PHONE));
        };
        // A bad phone must not leave an empty contact behind
        Phone::new(phone.as_str())?;

        match self.book.find_mut(name) {
            Some(record) => record.add_phone(phone)?,
            None => {
                let mut record = Record::new(Name::new(name.as_str())?);
                record.add_phone(phone)?;
                self.book.add_record(record);
            }
        }
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, args: &[String]) -> Result<String> {
        let [name, old, new] = args else {
            return Err(BookError::usage(CHANGE_USAGE));
        };
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok("Phone updated.".to_string())
    }

    fn show_phone(&self, args: &[String]) -> Result<String> {
        let name = first(args)?;
        Ok(self.record(name)?.phones_display())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            NO_CONTACTS.to_string()
        } else {
            self.book.to_string()
        }
    }

    fn add_birthday(&mut self, args: &[String]) -> Result<String> {
        let [name, birthday] = args else {
            return Err(BookError::usage(BIRTHDAY_USAGE));
        };
        self.record_mut(name)?.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, args: &[String]) -> Result<String> {
        let name = first(args)?;
        self.record(name)?
            .birthday
            .map(|b| b.to_string())
            .ok_or(BookError::BirthdayNotFound)
    }

    fn birthdays(&self) -> String {
        let greetings = self
            .book
            .upcoming_birthdays(self.clock.today(), DEFAULT_WINDOW_DAYS);
        if greetings.is_empty() {
            return NO_BIRTHDAYS.to_string();
        }
        greetings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn remove_phone(&mut self, args: &[String]) -> Result<String> {
        let [name, phone] = args else {
            return Err(BookError::usage(NAME_AND_PHONE));
        };
        let record = self.record_mut(name)?;
        record.remove_phone(phone)?;

        if record.phones.is_empty() {
            self.book.delete(name)?;
            return Ok(format!(
                "Phone removed. Contact '{}' deleted because no phones left.",
                name
            ));
        }
        Ok(format!("Phone '{}' removed from contact '{}'.", phone, name))
    }

    fn delete_contact(&mut self, args: &[String]) -> Result<String> {
        let name = first(args)?;
        self.book.delete(name)?;
        Ok(format!("Contact <{}> deleted.", name))
    }

    fn record(&self, name: &str) -> Result<&Record> {
        self.book.find(name).ok_or(BookError::ContactNotFound)
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.book.find_mut(name).ok_or(BookError::ContactNotFound)
    }
}

fn first(args: &[String]) -> Result<&str> {
    args.first()
        .map(String::as_str)
        .ok_or(BookError::usage(NAME_REQUIRED))
}
