//! Address book assistant command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use contactbook::cli::logging::{self, LoggingConfig};
use contactbook::cli::output::{self, OutputFormat};
use contactbook::cli::session::Session;
use contactbook::cli::view::ConsoleView;
use contactbook::{BookStore, Command, Reply};
use std::path::{Path, PathBuf};

/// Address book assistant bot
#[derive(Parser)]
#[command(name = "contactbook")]
#[command(author, version, about = "Keep contacts, phones and birthdays from the terminal", long_about = None)]
struct Cli {
    /// Address book file
    #[arg(
        short,
        long,
        global = true,
        env = "CONTACTBOOK_PATH",
        default_value = contactbook::book::DEFAULT_BOOK_FILE
    )]
    book: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    Repl,

    /// Run a single assistant command and save the book if it changed
    Run {
        /// Command word, e.g. `add` or `birthdays`
        command: String,

        /// Command arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print every contact
    Export {
        /// Output format (text, json, table)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init(&LoggingConfig {
        verbose: cli.verbose,
    });

    let store = BookStore::new(cli.book);
    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(store),
        Commands::Run { command, args } => run_once(store, &command, &args),
        Commands::Export { format, output } => {
            export(store, OutputFormat::from_str(&format), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn repl(store: BookStore) -> Result<()> {
    let mut session = Session::open(store)?;
    let mut view = ConsoleView::new()?;
    session.run(&mut view)
}

fn run_once(store: BookStore, word: &str, args: &[String]) -> Result<()> {
    let mut session = Session::open(store)?;

    match session.execute(&Command::from_word(word), args) {
        Reply::Message(text) => println!("{}", text),
        Reply::Exit => {
            eprintln!(
                "{}",
                output::format_warning("`exit` only applies to the interactive session")
            );
        }
    }

    if session.has_unsaved_changes() {
        session.save()?;
    }
    Ok(())
}

fn export(store: BookStore, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let session = Session::open(store)?;
    let content = output::format_contacts(session.assistant().book(), format)?;
    output::write_output(&content, output_file)
}
