//! Address book diagnostics and error handling
//!
//! This crate provides the error type shared by every contactbook crate,
//! together with the structured error codes used in logs and the CLI.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for address book operations
pub type Result<T> = std::result::Result<T, BookError>;
