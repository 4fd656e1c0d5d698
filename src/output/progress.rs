use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while the external tool runs.
///
/// The spinner is automatically disabled in quiet mode or when stderr is not
/// a TTY.
pub struct ToolProgress {
    bar: ProgressBar,
}

impl ToolProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.set_message("running stylelint");
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { bar }
    }

    /// Print a line above the spinner (plain stderr when hidden).
    pub fn println(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        } else {
            self.bar.println(message);
        }
    }

    /// Remove the spinner.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
