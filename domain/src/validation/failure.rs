//! Aggregated validation failure

use super::result::ErrorMessage;
use thiserror::Error;

/// Marker placed before every aggregated message
const LINE_PREFIX: &str = "-- ";

/// Terminator placed after every aggregated message
const LINE_SUFFIX: &str = ",\n";

/// The remote service reported the document as invalid
///
/// Display is the raw aggregated list, e.g. `"\n-- a,\n-- b,\n"` for
/// errors `["a", "b"]`. That text is what the user acts on, so nothing is
/// prepended to it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    /// Aggregate server messages into a single failure.
    ///
    /// An empty list yields the degenerate message `"\n"`.
    pub fn from_errors(errors: &[ErrorMessage]) -> Self {
        let lines: Vec<String> = errors
            .iter()
            .map(|error| format!("{LINE_PREFIX}{error}{LINE_SUFFIX}"))
            .collect();

        Self {
            message: format!("\n{}", lines.join("")),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
