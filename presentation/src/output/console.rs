//! Console output formatter for orb commands

use circleci_domain::{Orb, ValidationFailure};
use colored::Colorize;
use std::path::Path;

/// Formats orb command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per orb, name only
    pub fn format_orb(orb: &Orb) -> String {
        orb.name().to_string()
    }

    /// Success line for `orb validate`
    pub fn format_valid(path: &Path) -> String {
        format!("Orb at {} is valid", path.display())
            .green()
            .to_string()
    }

    /// Expanded document for `orb expand`, printed verbatim
    pub fn format_expanded(document: &str) -> String {
        document.to_string()
    }

    /// Failure body for an invalid orb: the aggregated server messages,
    /// untouched so they can be read and copied as-is.
    pub fn format_failure(failure: &ValidationFailure) -> String {
        failure.message().to_string()
    }

    /// Globally enable or disable ANSI colours.
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }
}
