//! The address book collection

use chrono::NaiveDate;
use contactbook_diagnostics::{BookError, Result};
use contactbook_types::Record;
use indexmap::IndexMap;
use std::fmt;

use crate::birthdays::{self, Greeting};

/// Contacts keyed by name, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name.as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, preserving the order of the others
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .shift_remove(name)
            .ok_or(BookError::ContactNotFound)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays to celebrate within `window_days` of `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<Greeting> {
        birthdays::upcoming(self.records(), today, window_days)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
