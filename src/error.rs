use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to copy rule config template: {path}")]
    TemplateCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Failed to launch {program}: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stylelint aborted: {reason}. {hint}")]
    FatalTool { reason: String, hint: String },
}

impl StyleGuardError {
    /// Fatal out-of-memory condition reported on the tool's stderr.
    #[must_use]
    pub fn heap_exhausted() -> Self {
        Self::FatalTool {
            reason: "the Node.js heap was exhausted".to_string(),
            hint: "Set STYLELINT_MAX_OLD_SPACE_SIZE to raise the heap limit (value in MB)"
                .to_string(),
        }
    }

    /// Fatal string-length overflow reported on the tool's stderr.
    #[must_use]
    pub fn string_length_exceeded() -> Self {
        Self::FatalTool {
            reason: "output exceeded the Node.js maximum string length".to_string(),
            hint: "The scan produced more output than a single Node.js string can hold \
                   (buffer.constants.MAX_STRING_LENGTH); scan fewer files per invocation \
                   or tighten the exclusion patterns"
                .to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
