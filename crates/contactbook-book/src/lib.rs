//! Address book
//!
//! This crate provides:
//! - `AddressBook`, the insertion-ordered collection of contact records
//! - The upcoming-birthday planner
//! - JSON persistence of the book on disk

pub mod birthdays;
pub mod book;
pub mod storage;

pub use birthdays::{Greeting, DEFAULT_WINDOW_DAYS};
pub use book::AddressBook;
pub use storage::{BookStore, DEFAULT_BOOK_FILE};
