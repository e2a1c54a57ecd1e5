//! CLI functionality for the assistant bot
//!
//! This module contains all CLI-related functionality including:
//! - The prompt loop
//! - Console and scripted views
//! - Logging setup
//! - Output formatting

#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod session;
#[cfg(feature = "cli")]
pub mod view;
