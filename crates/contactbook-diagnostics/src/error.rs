//! Address book error types

use crate::ErrorCode;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main address book error type
///
/// The display text of user-facing variants is the exact reply the assistant
/// prints, so command handlers can turn any error into a message with
/// `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// Wrong number of arguments for a command
    #[error("{usage}")]
    MissingArguments { usage: &'static str },

    /// No contact with the requested name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The contact exists but has no birthday
    #[error("Birthday not found.")]
    BirthdayNotFound,

    /// The contact has no such phone number
    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    /// The contact already has this phone number
    #[error("Phone number '{0}' already exists.")]
    DuplicatePhone(String),

    /// Phone number is not ten digits
    #[error("Phone number must be 10 digits long.")]
    InvalidPhone,

    /// Birthday is not a DD.MM.YYYY date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,

    /// Contact name is blank
    #[error("Contact name cannot be empty.")]
    EmptyName,

    /// Reading or writing the book file failed
    #[error("Failed to access address book at {}: {message}", path.display())]
    StorageIo { path: PathBuf, message: String },

    /// The book file exists but cannot be decoded
    #[error("Address book at {} is malformed: {message}", path.display())]
    StorageFormat { path: PathBuf, message: String },
}

impl BookError {
    /// Create a usage error
    pub fn usage(usage: &'static str) -> Self {
        Self::MissingArguments { usage }
    }

    /// Create an I/O storage error for `path`
    pub fn storage_io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::StorageIo {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create a decoding storage error for `path`
    pub fn storage_format(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::StorageFormat {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingArguments { .. } => ErrorCode::MISSING_ARGUMENTS,
            Self::ContactNotFound => ErrorCode::CONTACT_NOT_FOUND,
            Self::BirthdayNotFound => ErrorCode::BIRTHDAY_NOT_FOUND,
            Self::PhoneNotFound(_) => ErrorCode::PHONE_NOT_FOUND,
            Self::DuplicatePhone(_) => ErrorCode::DUPLICATE_PHONE,
            Self::InvalidPhone => ErrorCode::INVALID_PHONE,
            Self::InvalidBirthday => ErrorCode::INVALID_BIRTHDAY,
            Self::EmptyName => ErrorCode::EMPTY_NAME,
            Self::StorageIo { .. } => ErrorCode::STORAGE_IO,
            Self::StorageFormat { .. } => ErrorCode::STORAGE_FORMAT,
        }
    }

    /// Whether the error comes from user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        !self.code().is_storage_error()
    }

    /// Help text registered for this error's code, if any
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}
