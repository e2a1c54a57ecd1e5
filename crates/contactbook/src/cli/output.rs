//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use contactbook_book::AddressBook;
use contactbook_diagnostics::BookError;
use contactbook_types::Record;
use serde_json::{Value, json};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options for contact listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Contact name: ...` line per contact, as the `all` command prints
    Text,
    Json,
    Table,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "table" => Self::Table,
            _ => Self::Text, // default
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display, including its cause chain and any help
/// registered for the address book error behind it
pub fn format_error(error: &anyhow::Error) -> String {
    let message = format!("{} {:#}", "Error:".red().bold(), error);
    let help = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<BookError>())
        .and_then(BookError::help);

    match help {
        Some(help) => format!("{}\n  {} {}", message, "help:".cyan(), help),
        None => message,
    }
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

impl From<&Record> for ContactRow {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_string(),
            phones: record.phones_display(),
            birthday: record
                .birthday
                .map(|b| b.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Contacts as a JSON array, one object per record
pub fn contacts_json(book: &AddressBook) -> Value {
    Value::Array(
        book.records()
            .map(|r| {
                json!({
                    "name": r.name.as_str(),
                    "phones": r.phones.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
                    "birthday": r.birthday.map(|b| b.to_string()),
                })
            })
            .collect(),
    )
}

/// Render every contact in the requested format
pub fn format_contacts(book: &AddressBook, format: OutputFormat) -> Result<String> {
    if book.is_empty() && format != OutputFormat::Json {
        return Ok("(no contacts)".to_string());
    }

    Ok(match format {
        OutputFormat::Text => book.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&contacts_json(book))
            .context("Failed to serialize contacts")?,
        OutputFormat::Table => {
            let rows: Vec<ContactRow> = book.records().map(ContactRow::from).collect();
            Table::new(rows).with(Style::modern()).to_string()
        }
    })
}
