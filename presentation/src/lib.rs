//! Presentation layer for the circleci orb client
//!
//! This crate contains CLI definitions, output formatting
//! and progress indicators.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, DEFAULT_ORB_PATH, OrbArgs, OrbCommand, OrbPathArgs};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::RequestSpinner;
