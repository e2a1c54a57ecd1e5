//! Contact field types
//!
//! This crate defines the validated values an address book stores:
//! - `Name`, `Phone` and `Birthday` fields
//! - `Record`, one contact with its phones and optional birthday

pub mod fields;
pub mod record;

pub use fields::*;
pub use record::Record;
