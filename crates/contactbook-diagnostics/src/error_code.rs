//! Address book error codes following a structured numbering system
//!
//! Error code ranges:
//! - CB0001-CB0099: Input errors (argument count, usage)
//! - CB0100-CB0199: Validation errors (phone, birthday, name)
//! - CB0200-CB0299: Lookup errors (missing contacts, duplicates)
//! - CB0300-CB0399: Storage errors (I/O, malformed book file)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const MISSING_ARGUMENTS: Self = Self(1);

    pub const INVALID_PHONE: Self = Self(100);
    pub const INVALID_BIRTHDAY: Self = Self(101);
    pub const EMPTY_NAME: Self = Self(102);

    pub const CONTACT_NOT_FOUND: Self = Self(200);
    pub const PHONE_NOT_FOUND: Self = Self(201);
    pub const BIRTHDAY_NOT_FOUND: Self = Self(202);
    pub const DUPLICATE_PHONE: Self = Self(203);

    pub const STORAGE_IO: Self = Self(300);
    pub const STORAGE_FORMAT: Self = Self(301);

    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an input error (0001-0099)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a validation error (0100-0199)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a lookup error (0200-0299)
    pub const fn is_lookup_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a storage error (0300-0399)
    pub const fn is_storage_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CB{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Input errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Missing or extra command arguments")
            .with_help("Type `help` to see the arguments each command expects"),
    );

    // Validation errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Invalid phone number").with_help("Phone numbers are exactly 10 digits"),
    );
    map.insert(
        101,
        ErrorInfo::new("Invalid birthday").with_help("Birthdays use the DD.MM.YYYY format"),
    );
    map.insert(102, ErrorInfo::new("Empty contact name"));

    // Lookup errors (0200-0299)
    map.insert(200, ErrorInfo::new("Contact not found"));
    map.insert(201, ErrorInfo::new("Phone number not found"));
    map.insert(202, ErrorInfo::new("Birthday not set"));
    map.insert(203, ErrorInfo::new("Duplicate phone number"));

    // Storage errors (0300-0399)
    map.insert(300, ErrorInfo::new("I/O error"));
    map.insert(
        301,
        ErrorInfo::new("Malformed address book file")
            .with_help("Fix or move the file aside; a new book is created when it is missing"),
    );

    map
});
