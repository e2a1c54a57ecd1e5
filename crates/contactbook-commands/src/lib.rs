//! Assistant bot commands
//!
//! Turns a line typed at the prompt into a command, runs it against the
//! address book and produces the reply text. Errors never escape a command:
//! they become the reply.

pub mod assistant;
pub mod clock;
pub mod command;
pub mod help;

pub use assistant::{Assistant, Reply};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Command, parse_input};
pub use help::HELP_TEXT;
