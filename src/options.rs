//! Recognized environment overrides, read once into an immutable struct.
//!
//! Every component takes `ToolOptions` explicitly; nothing else in the crate
//! reads the process environment for tool behavior.

/// Node heap limit override, in megabytes.
pub const ENV_MAX_OLD_SPACE_SIZE: &str = "STYLELINT_MAX_OLD_SPACE_SIZE";
/// Node/stylelint install directory; also the rule config template source.
pub const ENV_NODE_HOME: &str = "NODE_HOME";
/// Explicit stylelint config file, used verbatim.
pub const ENV_CONFIG: &str = "STYLELINT_CONFIG";
/// Rule config template variant: `default`, `custom`, or a named variant.
pub const ENV_CONFIG_TYPE: &str = "STYLELINT_CONFIG_TYPE";
/// Non-standard stylesheet syntax name (e.g. `scss`, `sugarss`), passed through.
pub const ENV_SYNTAX: &str = "STYLELINT_SYNTAX";
/// PostCSS-compatible syntax module name or path, passed through.
pub const ENV_CUSTOM_SYNTAX: &str = "STYLELINT_CUSTOM_SYNTAX";

/// Immutable snapshot of the recognized environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOptions {
    /// `--max-old-space-size` value; presence switches to direct `node` invocation.
    pub max_old_space_size: Option<String>,
    /// Base directory of the Node install hosting stylelint and the config templates.
    pub node_home: Option<String>,
    /// Explicit stylelint config path override.
    pub config_file: Option<String>,
    /// Template variant name.
    pub config_variant: Option<String>,
    /// `--syntax` pass-through.
    pub syntax: Option<String>,
    /// `--custom-syntax` pass-through.
    pub custom_syntax: Option<String>,
}

impl ToolOptions {
    /// Snapshot the recognized overrides from the process environment.
    ///
    /// Unset and non-unicode values both read as `None`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_old_space_size: read(ENV_MAX_OLD_SPACE_SIZE),
            node_home: read(ENV_NODE_HOME),
            config_file: read(ENV_CONFIG),
            config_variant: read(ENV_CONFIG_TYPE),
            syntax: read(ENV_SYNTAX),
            custom_syntax: read(ENV_CUSTOM_SYNTAX),
        }
    }
}

fn read(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
