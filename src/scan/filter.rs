use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGuardError};

/// Exclusion filter over source-relative paths.
///
/// Patterns are matched against the path with its source-dir prefix stripped,
/// so `vendor/**` excludes `<source_dir>/vendor/...` regardless of where the
/// source tree lives.
pub struct PathFilter {
    exclude_patterns: GlobSet,
}

impl PathFilter {
    /// Compile the exclusion patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| StyleGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    /// Whether the path matches an exclusion pattern, after stripping the
    /// first `prefix_len` bytes (the source-dir prefix plus its separator).
    #[must_use]
    pub fn is_excluded(&self, path: &str, prefix_len: usize) -> bool {
        let relative = path.get(prefix_len..).unwrap_or("");
        self.exclude_patterns.is_match(Path::new(relative))
    }

    /// Keep only the paths that no exclusion pattern matches.
    #[must_use]
    pub fn retain_included(&self, paths: Vec<String>, prefix_len: usize) -> Vec<String> {
        paths
            .into_iter()
            .filter(|p| !self.is_excluded(p, prefix_len))
            .collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
