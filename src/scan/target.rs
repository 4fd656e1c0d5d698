use std::path::Path;

use crate::git::{ChangeEntry, ChangeState};
use crate::{GLOB_ALL_PATTERN, has_style_extension};

use super::PathFilter;

/// What gets handed to the external tool as scan input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Explicit absolute file paths (forward-slash separators).
    Files(Vec<String>),
    /// The glob-all sentinel covering every recognized stylesheet.
    GlobAll,
}

impl ScanTarget {
    /// Render the target as command-line arguments.
    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        match self {
            Self::Files(paths) => paths,
            Self::GlobAll => vec![GLOB_ALL_PATTERN.to_string()],
        }
    }
}

/// Ceiling on the joined target-path string before falling back to the
/// glob-all sentinel. Sits with margin under the 32 768-character Windows
/// CreateProcess limit; applied on every platform.
pub const MAX_TARGET_CHARS: usize = 32_500;

/// Decide what to scan.
///
/// Full scans always use the glob-all sentinel. Incremental scans enumerate
/// the changeset: recognized stylesheet extensions only, deleted entries
/// dropped, paths absolutized under `source_dir` with forward slashes, then
/// the exclusion filter applied against the source-relative portion.
///
/// Returns `None` when an incremental changeset leaves nothing to scan; the
/// caller short-circuits with zero issues and no process launch.
#[must_use]
pub fn resolve_targets(
    source_dir: &Path,
    incremental: bool,
    changes: &[ChangeEntry],
    filter: &PathFilter,
) -> Option<ScanTarget> {
    if !incremental {
        return Some(ScanTarget::GlobAll);
    }

    let root = normalized_root(source_dir);
    let prefix_len = root.len() + 1;

    let targets: Vec<String> = changes
        .iter()
        .filter(|entry| entry.state != ChangeState::Deleted && has_style_extension(&entry.path))
        .map(|entry| format!("{root}/{}", entry.path))
        .collect();
    let targets = filter.retain_included(targets, prefix_len);

    if targets.is_empty() {
        return None;
    }

    // joined length counts the separating spaces too
    let joined_len = targets.iter().map(String::len).sum::<usize>() + targets.len() - 1;
    if joined_len > MAX_TARGET_CHARS {
        return Some(ScanTarget::GlobAll);
    }

    Some(ScanTarget::Files(targets))
}

fn normalized_root(source_dir: &Path) -> String {
    let simplified = dunce::simplified(source_dir);
    let root = simplified.to_string_lossy().replace('\\', "/");
    root.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
