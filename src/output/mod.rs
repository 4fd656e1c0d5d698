mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ToolProgress;
pub use text::{ColorMode, TextFormatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tool::Issue;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Renders issue records for presentation.
pub trait OutputFormatter {
    /// Format the issues into a complete output document.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, issues: &[Issue]) -> Result<String>;
}

/// Pick a formatter for the requested format.
#[must_use]
pub fn formatter_for(format: OutputFormat, color_mode: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color_mode)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
