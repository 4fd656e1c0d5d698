//! Raw rule-parameter decoding.
//!
//! Parameters arrive as free-form strings. A JSON literal wins; otherwise the
//! string is read as informal `key=value` lines and the `options` entry, if
//! present, becomes the rule value after scalar type sniffing.

use indexmap::IndexMap;
use serde_json::Value;

/// Decode a raw parameter string into a rule value.
///
/// Returns `None` when the string is neither a JSON literal nor a `key=value`
/// set containing an `options` entry; the caller leaves the rule value as-is.
#[must_use]
pub fn parse_rule_value(raw: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Some(value);
    }

    let entries = parse_key_values(raw);
    entries.get("options").map(|opt| coerce_scalar(opt))
}

/// Read informal `key=value` lines into an ordered map.
///
/// Blank lines and `[section]` header lines are skipped; a line without `=`
/// is ignored. Values keep everything after the first `=`.
fn parse_key_values(raw: &str) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || (line.starts_with('[') && line.ends_with(']')) {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    entries
}

/// Sniff a scalar type out of a raw string: integer, float, bool, else string.
fn coerce_scalar(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(f) {
            return Value::Number(number);
        }
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
