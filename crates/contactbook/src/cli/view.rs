//! Where the session reads commands from and writes replies to

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::path::PathBuf;

/// History file kept in the user's home directory
const HISTORY_FILE: &str = ".contactbook_history";

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without the trailing newline
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// No more input (Ctrl-D or end of a piped stream)
    Closed,
}

pub trait View {
    fn display(&mut self, message: &str);

    fn prompt(&mut self, message: &str) -> Result<Input>;
}

/// Interactive terminal view with line editing and history
pub struct ConsoleView {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl ConsoleView {
    pub fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        let history_file = home_dir().map(|home| home.join(HISTORY_FILE));
        if let Some(ref path) = history_file {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl View for ConsoleView {
    fn display(&mut self, message: &str) {
        println!("{}", message);
    }

    fn prompt(&mut self, message: &str) -> Result<Input> {
        match self.editor.readline(message) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(Input::Interrupted)
            }
            Err(ReadlineError::Eof) => Ok(Input::Closed),
            Err(err) => Err(err.into()),
        }
    }
}

impl Drop for ConsoleView {
    fn drop(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::debug!("Could not save history to {}: {}", path.display(), e);
            }
        }
    }
}

/// Replays canned input and records everything displayed
#[derive(Debug, Default)]
pub struct ScriptedView {
    input: VecDeque<Input>,
    output: Vec<String>,
}

impl ScriptedView {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
            output: Vec::new(),
        }
    }

    /// Queue an arbitrary input event
    pub fn push(&mut self, input: Input) {
        self.input.push_back(input);
    }

    /// Messages displayed so far, in order
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl View for ScriptedView {
    fn display(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn prompt(&mut self, _message: &str) -> Result<Input> {
        Ok(self.input.pop_front().unwrap_or(Input::Closed))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
