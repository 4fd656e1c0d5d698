use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::tool::Issue;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    issues: &'a [Issue],
}

#[derive(Serialize)]
struct Summary {
    total_issues: usize,
    files: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let files: HashSet<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        let output = JsonOutput {
            summary: Summary {
                total_issues: issues.len(),
                files: files.len(),
            },
            issues,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
