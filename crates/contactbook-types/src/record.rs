//! Contact records

use crate::{Birthday, Name, Phone};
use contactbook_diagnostics::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

/// Saved form of a record, replayed through `add_phone` when decoded
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = BookError;

    fn try_from(data: RecordData) -> Result<Self> {
        let mut record = Record::new(data.name);
        for phone in &data.phones {
            record.add_phone(phone.as_str())?;
        }
        record.birthday = data.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Add a phone number, rejecting invalid and duplicate numbers
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::new(phone)?;
        if self.find_phone(phone.as_str()).is_some() {
            return Err(BookError::DuplicatePhone(phone.into()));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the list
    ///
    /// Nothing changes unless every check passes.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self.position(old)?;
        let replacement = Phone::new(new)?;
        if old != new && self.find_phone(new).is_some() {
            return Err(BookError::DuplicatePhone(new.to_string()));
        }
        self.phones[index] = replacement;
        Ok(())
    }

    /// Set the birthday, replacing any previous one
    pub fn set_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(birthday.parse()?);
        Ok(())
    }

    /// Phones joined by `"; "`
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position(&self, phone: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
