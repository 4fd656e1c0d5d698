use std::collections::HashSet;
use std::fmt::Write;

use crate::error::Result;
use crate::tool::Issue;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let mut out = String::new();

        for issue in issues {
            let location = format!("{}:{}:{}", issue.path, issue.line, issue.column);
            let _ = writeln!(
                out,
                "{}  {}  {}",
                self.paint(ansi::CYAN, &location),
                self.paint(ansi::RED, &issue.rule),
                issue.message
            );
        }

        if issues.is_empty() {
            let _ = writeln!(out, "{}", self.paint(ansi::GREEN, "No issues found"));
        } else {
            let files: HashSet<&str> = issues.iter().map(|i| i.path.as_str()).collect();
            let _ = writeln!(
                out,
                "\nSummary: {} issue{} across {} file{}",
                issues.len(),
                if issues.len() == 1 { "" } else { "s" },
                files.len(),
                if files.len() == 1 { "" } else { "s" },
            );
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
