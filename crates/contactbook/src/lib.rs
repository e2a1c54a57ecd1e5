//! Address book assistant bot
//!
//! This crate bundles the contactbook workspace:
//! - Validated contact fields and records
//! - The address book, its birthday planner and JSON storage
//! - Command parsing and the assistant that answers them
//! - The interactive command-line session (`cli` feature)
//!
//! # Example
//!
//! ```
//! use contactbook::{AddressBook, Assistant, Reply};
//!
//! let mut assistant = Assistant::new(AddressBook::new());
//! assistant.handle_line("add John 1234567890");
//!
//! assert_eq!(
//!     assistant.handle_line("phone John"),
//!     Reply::Message("1234567890".to_string())
//! );
//! ```

// Re-export all public APIs from internal crates
pub use contactbook_book as book;
pub use contactbook_commands as commands;
pub use contactbook_diagnostics as diagnostics;
pub use contactbook_types as types;

// Convenience re-exports
pub use contactbook_book::{AddressBook, BookStore};
pub use contactbook_commands::{Assistant, Command, Reply};
pub use contactbook_diagnostics::{BookError, Result};
pub use contactbook_types::Record;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
