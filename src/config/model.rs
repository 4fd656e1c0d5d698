use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::rules::RuleSpec;

/// Scan-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Exclusion globs, matched against source-relative paths.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default output format; the CLI flag wins when given.
    #[serde(default)]
    pub format: OutputFormat,
}

/// The `.style-guard.toml` task configuration.
///
/// ```toml
/// [scan]
/// exclude = ["vendor/**"]
///
/// [output]
/// format = "text"
///
/// rules = ["color-no-invalid-hex", "unit-no-unknown"]
///
/// [[rule]]
/// name = "color-hex-length"
/// params = '["short"]'
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Rule allow-list: only these rule-ids surface as issues.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Per-rule enablements merged into the stylelint rule config.
    #[serde(default)]
    pub rule: Vec<RuleSpec>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
