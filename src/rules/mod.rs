mod config;
mod params;

pub use config::{DEFAULT_TEMPLATE_NAME, RuleConfigDocument, resolve_config, template_file_name};
pub use params::parse_rule_value;

use serde::{Deserialize, Serialize};

/// Caller-supplied rule enablement: a rule-id plus an optional raw parameter
/// string (JSON literal or informal `key=value` lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    #[serde(default)]
    pub params: String,
}
