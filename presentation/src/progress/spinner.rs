//! Spinner shown while a request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr, so stdout stays clean for piping.
///
/// A hidden spinner is a no-op, used for `--quiet`.
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    pub fn new(message: impl Into<String>, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.into());
        Self { bar }
    }

    /// A spinner that never draws.
    pub fn hidden() -> Self {
        Self::new("", false)
    }

    /// Print a line to stdout without tearing the spinner.
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    /// Remove the spinner line before printing results.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Drop for RequestSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
