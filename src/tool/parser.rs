use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::has_style_extension;

/// One normalized diagnostic from the tool's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: String,
    pub rule: String,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// Why a raw output line produced no diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing but whitespace.
    Blank,
    /// Fewer than two whitespace tokens.
    TooFewTokens,
    /// First token is not a `line:column` pair of positive integers.
    BadLocation,
}

/// Classification of one raw output line.
///
/// The tool's output format carries no contract, so "skipped" is a normal
/// outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A bare path header: the tool's "scanning file X" banner.
    FileBanner(String),
    /// A location-prefixed diagnostic; the path comes from the last banner.
    Diagnostic {
        line: u32,
        column: u32,
        rule: String,
        message: String,
    },
    Skip(SkipReason),
}

/// Classify one raw output line. Pure; no I/O, no state.
#[must_use]
pub fn parse_line(raw: &str) -> LineOutcome {
    let line = raw.trim_end_matches(['\n', '\r']);

    if has_style_extension(line) {
        return LineOutcome::FileBanner(line.to_string());
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return LineOutcome::Skip(SkipReason::Blank);
    }
    if tokens.len() < 2 {
        return LineOutcome::Skip(SkipReason::TooFewTokens);
    }

    let Some((line_no, column)) = parse_location(tokens[0]) else {
        return LineOutcome::Skip(SkipReason::BadLocation);
    };

    let rule = (*tokens.last().unwrap_or(&"")).to_string();
    let message = if tokens.len() > 2 {
        tokens[2..tokens.len() - 1].join(" ")
    } else {
        String::new()
    };

    LineOutcome::Diagnostic {
        line: line_no,
        column,
        rule,
        message,
    }
}

fn parse_location(token: &str) -> Option<(u32, u32)> {
    let (line, column) = token.split_once(':')?;
    let line = line.parse::<u32>().ok()?;
    let column = column.parse::<u32>().ok()?;
    if line == 0 || column == 0 {
        return None;
    }
    Some((line, column))
}

/// Convert a captured output file into issue records.
///
/// A missing or empty capture file means "no diagnostics", not an error.
/// Banner lines establish the current path; diagnostics are kept only when a
/// path is established and their rule-id is in the allow-list.
///
/// # Errors
/// Returns an error only if an existing capture file cannot be read.
pub fn parse_output(capture_path: &Path, allow_list: &HashSet<String>) -> Result<Vec<Issue>> {
    if !capture_path.exists() {
        return Ok(Vec::new());
    }
    let bytes = fs::read(capture_path)?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let content = String::from_utf8_lossy(&bytes);

    let mut issues = Vec::new();
    let mut current_path: Option<String> = None;

    for raw in content.lines() {
        match parse_line(raw) {
            LineOutcome::FileBanner(path) => current_path = Some(path),
            LineOutcome::Diagnostic {
                line,
                column,
                rule,
                message,
            } => {
                if !allow_list.contains(&rule) {
                    continue;
                }
                let Some(path) = &current_path else {
                    continue;
                };
                issues.push(Issue {
                    path: path.clone(),
                    rule,
                    message,
                    line,
                    column,
                });
            }
            LineOutcome::Skip(_) => {}
        }
    }

    Ok(issues)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
