//! Interactive session

use super::view::{Input, View};
use anyhow::{Context, Result};
use contactbook_book::BookStore;
use contactbook_commands::{Assistant, Command, Reply};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// A conversation between the user and the assistant over one book
pub struct Session {
    assistant: Assistant,
    store: BookStore,
}

impl Session {
    /// Load the book from `store` and start a session over it
    pub fn open(store: BookStore) -> Result<Self> {
        let book = store
            .load()
            .with_context(|| format!("Failed to open address book {}", store.path().display()))?;
        Ok(Self::new(Assistant::new(book), store))
    }

    pub fn new(assistant: Assistant, store: BookStore) -> Self {
        Self { assistant, store }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Run one command outside the prompt loop
    pub fn execute(&mut self, command: &Command, args: &[String]) -> Reply {
        self.assistant.execute(command, args)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.assistant.is_dirty()
    }

    /// Run the prompt loop until `exit` or end of input, then save the book
    ///
    /// A failed read still saves before the error is returned.
    pub fn run(&mut self, view: &mut impl View) -> Result<()> {
        log::info!(
            "Session started with {} contact(s) from {}",
            self.assistant.book().len(),
            self.store.path().display()
        );
        view.display(WELCOME);

        loop {
            let input = match view.prompt(PROMPT) {
                Ok(input) => input,
                Err(e) => {
                    if let Err(save_err) = self.save() {
                        log::error!("{:#}", save_err);
                    }
                    return Err(e.context("Failed to read command"));
                }
            };
            let line = match input {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Closed => break,
            };

            match self.assistant.handle_line(line.trim()) {
                Reply::Message(text) => view.display(&text),
                Reply::Exit => break,
            }
        }

        self.save()?;
        view.display(FAREWELL);
        Ok(())
    }

    /// Write the book back to its store
    pub fn save(&mut self) -> Result<()> {
        self.store
            .save(self.assistant.book())
            .with_context(|| format!("Failed to save address book {}", self.store.path().display()))?;
        self.assistant.mark_saved();
        Ok(())
    }
}
