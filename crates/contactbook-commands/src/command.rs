//! Command words and input splitting

use std::fmt;

/// A command recognised by the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Unknown(String),
}

impl Command {
    /// Whether running this command can change the book
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::AddBirthday | Self::RemovePhone | Self::Delete
        )
    }

    /// Look up a command word, case-insensitively
    pub fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "exit" | "close" => Self::Exit,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            // legacy spelling
            "delete" | "delet" => Self::Delete,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hello => "hello",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::RemovePhone => "remove-phone",
            Self::Delete => "delete",
            Self::Unknown(word) => word,
        };
        f.write_str(word)
    }
}

/// Split a prompt line into a lower-cased command word and its arguments
///
/// Returns `None` for blank input. Arguments keep their original case.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
