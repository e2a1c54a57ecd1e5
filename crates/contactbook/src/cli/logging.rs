//! Logging setup for the command-line tool
//!
//! Library crates log through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter that also captures `log` records and writes
//! them to stderr, so stdout carries only the conversation.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the verbosity
//! flag: `warn` by default, `debug` with `--verbose`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Show debug output from the contactbook crates
    pub verbose: bool,
}

impl LoggingConfig {
    fn default_directive(&self) -> &'static str {
        if self.verbose {
            "warn,contactbook=debug,contactbook_book=debug,contactbook_commands=debug"
        } else {
            "warn"
        }
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize logging: {}", e);
        }
    });
}
