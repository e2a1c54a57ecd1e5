//! End-to-end session tests
//!
//! Drive full conversations through a scripted view against a book stored in
//! a temporary directory.

use chrono::NaiveDate;
use contactbook::cli::output::{self, OutputFormat};
use contactbook::cli::session::{FAREWELL, PROMPT, Session, WELCOME};
use contactbook::cli::view::{Input, ScriptedView, View};
use contactbook::commands::FixedClock;
use contactbook::{AddressBook, Assistant, BookStore};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> BookStore {
    BookStore::new(dir.path().join("addressbook.json"))
}

fn converse(store: BookStore, lines: &[&str]) -> Vec<String> {
    let mut session = Session::open(store).unwrap();
    let mut view = ScriptedView::new(lines.iter().copied());
    session.run(&mut view).unwrap();
    view.output().to_vec()
}

#[test]
fn test_full_conversation() {
    let dir = TempDir::new().unwrap();
    let output = converse(
        store_in(&dir),
        &[
            "hello",
            "add John 1234567890",
            "",
            "add-birthday John 01.01.1990",
            "all",
            "exit",
            "hello",
        ],
    );

    assert_eq!(
        output,
        vec![
            WELCOME,
            "How can I help you?",
            "Contact added.",
            "Please enter a valid command. Write <help> to see all commands.",
            "Birthday added.",
            "Contact name: John, phones: 1234567890, birthday: 01.01.1990",
            FAREWELL,
        ]
    );
}

#[test]
fn test_book_persists_between_sessions() {
    let dir = TempDir::new().unwrap();
    converse(store_in(&dir), &["add John 1234567890", "exit"]);

    let output = converse(store_in(&dir), &["phone John", "exit"]);
    assert_eq!(output[1], "1234567890");
}

#[test]
fn test_end_of_input_saves_like_exit() {
    let dir = TempDir::new().unwrap();
    let output = converse(store_in(&dir), &["add Jane 9876543210"]);

    assert_eq!(output.last().map(String::as_str), Some(FAREWELL));
    let book = store_in(&dir).load().unwrap();
    assert!(book.find("Jane").is_some());
}

#[test]
fn test_interrupt_reprompts() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::open(store_in(&dir)).unwrap();
    let mut view = ScriptedView::default();
    view.push(Input::Interrupted);
    view.push(Input::Line("hello".to_string()));
    view.push(Input::Line("exit".to_string()));

    session.run(&mut view).unwrap();

    assert_eq!(
        view.output(),
        &[WELCOME, "How can I help you?", FAREWELL].map(String::from)
    );
}

#[test]
fn test_exit_saves_even_without_changes() {
    let dir = TempDir::new().unwrap();
    converse(store_in(&dir), &["exit"]);

    let raw = fs::read_to_string(dir.path().join("addressbook.json")).unwrap();
    assert!(raw.contains("\"contacts\": []"));
}

#[test]
fn test_malformed_book_fails_to_open() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("addressbook.json"), "{").unwrap();

    let err = Session::open(store_in(&dir)).err().unwrap();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to open address book"));
    assert!(message.contains("malformed"));
}

#[test]
fn test_error_output_includes_help() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("addressbook.json"), "{").unwrap();

    let err = Session::open(store_in(&dir)).err().unwrap();
    let text = output::format_error(&err);
    assert!(text.contains("malformed"));
    assert!(text.contains("Fix or move the file aside"));

    let text = output::format_error(&anyhow::anyhow!("terminal hung up"));
    assert!(text.contains("terminal hung up"));
    assert!(!text.contains("help:"));
}

#[test]
fn test_birthdays_in_session() {
    let dir = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let assistant = Assistant::with_clock(AddressBook::new(), FixedClock(today));
    let mut session = Session::new(assistant, store_in(&dir));
    let mut view = ScriptedView::new([
        "add John 1234567890",
        "add-birthday John 20.01.1990",
        "birthdays",
    ]);

    session.run(&mut view).unwrap();

    assert_eq!(view.output()[3], "John - 22.01.2024");
}

#[test]
fn test_single_command_execution_tracks_changes() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::open(store_in(&dir)).unwrap();

    session.execute(&contactbook::Command::All, &[]);
    assert!(!session.has_unsaved_changes());

    session.execute(
        &contactbook::Command::Add,
        &["John".to_string(), "1234567890".to_string()],
    );
    assert!(session.has_unsaved_changes());

    session.save().unwrap();
    assert!(!session.has_unsaved_changes());
    assert_eq!(store_in(&dir).load().unwrap().len(), 1);
}

/// Answers with its lines, then fails like a terminal that went away
struct HangupView {
    lines: Vec<&'static str>,
    output: Vec<String>,
}

impl View for HangupView {
    fn display(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn prompt(&mut self, _message: &str) -> anyhow::Result<Input> {
        if self.lines.is_empty() {
            anyhow::bail!("terminal hung up");
        }
        Ok(Input::Line(self.lines.remove(0).to_string()))
    }
}

#[test]
fn test_read_error_saves_before_failing() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::open(store_in(&dir)).unwrap();
    let mut view = HangupView {
        lines: vec!["add Ann 0501234567"],
        output: Vec::new(),
    };

    let err = session.run(&mut view).unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to read command"));
    assert!(message.contains("terminal hung up"));
    assert!(!session.has_unsaved_changes());
    assert_eq!(view.output, vec![WELCOME, "Contact added."]);
    let book = store_in(&dir).load().unwrap();
    assert_eq!(book.find("Ann").unwrap().phones_display(), "0501234567");
}

#[test]
fn test_scripted_view_prompt_after_script_ends() {
    let mut view = ScriptedView::new(["all"]);
    assert_eq!(view.prompt(PROMPT).unwrap(), Input::Line("all".to_string()));
    assert_eq!(view.prompt(PROMPT).unwrap(), Input::Closed);
}

// === Output ===

fn sample_book() -> AddressBook {
    let mut assistant = Assistant::new(AddressBook::new());
    assistant.handle_line("add John 1234567890");
    assistant.handle_line("add John 5555555555");
    assistant.handle_line("add Jane 9876543210");
    assistant.handle_line("add-birthday Jane 20.01.1990");
    assistant.into_book()
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::from_str("whatever"), OutputFormat::Text);
}

#[test]
fn test_contacts_as_json() {
    let value = output::contacts_json(&sample_book());

    assert_eq!(
        value,
        serde_json::json!([
            {"name": "John", "phones": ["1234567890", "5555555555"], "birthday": null},
            {"name": "Jane", "phones": ["9876543210"], "birthday": "20.01.1990"},
        ])
    );
}

#[test]
fn test_contacts_as_text_and_table() {
    let book = sample_book();

    let text = output::format_contacts(&book, OutputFormat::Text).unwrap();
    assert_eq!(text, book.to_string());

    let table = output::format_contacts(&book, OutputFormat::Table).unwrap();
    assert!(table.contains("Name"));
    assert!(table.contains("1234567890; 5555555555"));
    assert!(table.contains("20.01.1990"));
}

#[test]
fn test_empty_book_output() {
    let book = AddressBook::new();
    assert_eq!(
        output::format_contacts(&book, OutputFormat::Text).unwrap(),
        "(no contacts)"
    );
    assert_eq!(
        output::format_contacts(&book, OutputFormat::Json).unwrap(),
        "[]"
    );
}
