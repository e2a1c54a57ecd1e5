//! JSON persistence for the address book
//!
//! The book is stored as a versioned JSON document. Saves go to a sibling
//! temporary file that is then renamed over the target, so an interrupted
//! save leaves the previous book intact.

use contactbook_diagnostics::{BookError, Result};
use contactbook_types::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::AddressBook;

/// File name used when no path is configured
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Current on-disk format version
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookFileRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookFile {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Loads and saves an `AddressBook` at a fixed path
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book, or an empty one when the file does not exist yet
    pub fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(BookError::storage_io(&self.path, e)),
        };

        let file: BookFile = serde_json::from_str(&content)
            .map_err(|e| BookError::storage_format(&self.path, e))?;
        if file.version > FORMAT_VERSION {
            return Err(BookError::storage_format(
                &self.path,
                format!("unsupported format version {}", file.version),
            ));
        }

        let mut book = AddressBook::new();
        for record in file.contacts {
            if book.find(record.name.as_str()).is_some() {
                return Err(BookError::storage_format(
                    &self.path,
                    format!("duplicate contact '{}'", record.name),
                ));
            }
            book.add_record(record);
        }
        log::debug!(
            "Loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    /// Write the book atomically
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let document = BookFileRef {
            version: FORMAT_VERSION,
            contacts: book.records().collect(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| BookError::storage_format(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BookError::storage_io(parent, e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| BookError::storage_io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            BookError::storage_io(&self.path, e)
        })?;

        log::debug!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_BOOK_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_FILE)
    }
}
