use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StyleGuardError};
use crate::options::{ENV_NODE_HOME, ToolOptions};

use super::RuleSpec;
use super::params::parse_rule_value;

/// File name of the default rule config template under the template dir.
pub const DEFAULT_TEMPLATE_NAME: &str = "stylelintrc.json";

/// Template file name for a named variant (e.g. `strict_stylelintrc.json`).
#[must_use]
pub fn template_file_name(variant: &str) -> String {
    format!("{variant}_{DEFAULT_TEMPLATE_NAME}")
}

/// A stylelint rule config document.
///
/// `rules` maps rule-id to value (`null` disables a rule); every other
/// top-level key is carried through untouched. Key order is preserved so a
/// template round-trips stably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfigDocument {
    #[serde(default)]
    pub rules: IndexMap<String, Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl RuleConfigDocument {
    /// Load a document from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the document as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Disable every template rule outside the allow-list.
    ///
    /// An empty allow-list leaves the template untouched.
    pub fn disable_rules_outside(&mut self, allow_list: &HashSet<String>) {
        if allow_list.is_empty() {
            return;
        }
        for (name, value) in &mut self.rules {
            if !allow_list.contains(name) {
                *value = Value::Null;
            }
        }
    }

    /// Merge caller rule specs into the document.
    ///
    /// A spec for an absent rule enables it with `true`. A non-empty raw
    /// parameter replaces the value when it decodes; an undecodable parameter
    /// leaves the value as-is.
    pub fn apply_rule_specs(&mut self, specs: &[RuleSpec]) {
        for spec in specs {
            if !self.rules.contains_key(&spec.name) {
                self.rules.insert(spec.name.clone(), Value::Bool(true));
            }
            if spec.params.trim().is_empty() {
                continue;
            }
            if let Some(value) = parse_rule_value(&spec.params) {
                self.rules.insert(spec.name.clone(), value);
            }
        }
    }
}

/// Resolve the stylelint config file for one invocation.
///
/// Resolution order:
/// 1. explicit `STYLELINT_CONFIG` path, returned verbatim;
/// 2. a named template variant: copied from the template dir into `work_dir`,
///    no rule mutation;
/// 3. `custom`: `None`; the tool falls back to the repository's own
///    stylelint config resolution;
/// 4. `default` or unset: the default template is copied into `work_dir`,
///    allow-list filtering and rule specs applied, then persisted.
///
/// # Errors
/// Returns an error if the template dir is unset when a template is needed,
/// or if copying, parsing, or persisting the config fails.
pub fn resolve_config(
    options: &ToolOptions,
    work_dir: &Path,
    allow_list: &HashSet<String>,
    specs: &[RuleSpec],
) -> Result<Option<PathBuf>> {
    if let Some(explicit) = &options.config_file {
        return Ok(Some(PathBuf::from(explicit)));
    }

    match options.config_variant.as_deref() {
        Some("custom") => Ok(None),
        Some(variant) if variant != "default" => {
            let file_name = template_file_name(variant);
            let dest = work_dir.join(&file_name);
            copy_template(options, &file_name, &dest)?;
            Ok(Some(dest))
        }
        _ => {
            let dest = work_dir.join(DEFAULT_TEMPLATE_NAME);
            copy_template(options, DEFAULT_TEMPLATE_NAME, &dest)?;

            let mut document = RuleConfigDocument::load(&dest)?;
            document.disable_rules_outside(allow_list);
            document.apply_rule_specs(specs);
            document.save(&dest)?;

            Ok(Some(dest))
        }
    }
}

fn template_dir(options: &ToolOptions) -> Result<PathBuf> {
    options.node_home.as_deref().map(PathBuf::from).ok_or_else(|| {
        StyleGuardError::Config(format!(
            "{ENV_NODE_HOME} must be set to locate rule config templates"
        ))
    })
}

fn copy_template(options: &ToolOptions, file_name: &str, dest: &Path) -> Result<()> {
    let source = template_dir(options)?.join(file_name);
    fs::copy(&source, dest).map_err(|e| StyleGuardError::TemplateCopy {
        path: source,
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
