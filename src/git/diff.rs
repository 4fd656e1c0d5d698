use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{Result, StyleGuardError};

/// How a path changed relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeState {
    Added,
    Modified,
    Deleted,
}

/// One changeset entry: a repo-relative path (forward slashes) and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub path: String,
    pub state: ChangeState,
}

/// Produces the changeset relative to a git baseline.
pub trait ChangedFiles {
    /// Get entries changed between the given reference and HEAD.
    ///
    /// # Errors
    /// Returns an error if the reference cannot be parsed or the repository
    /// cannot be accessed.
    fn changes_since(&self, base_ref: &str) -> Result<Vec<ChangeEntry>>;
}

/// A parsed diff range (base..target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRange {
    pub base: String,
    pub target: String,
}

/// Parse a diff reference string into a `DiffRange`.
///
/// Supports:
/// - `ref` → base=ref, target=HEAD
/// - `base..target` → base=base, target=target
/// - `base..` → base=base, target=HEAD
///
/// # Errors
/// Returns an error if the input is empty or starts with `..` (no base).
pub fn parse_diff_range(diff_ref: &str) -> Result<DiffRange> {
    if diff_ref.is_empty() {
        return Err(StyleGuardError::Config(
            "--diff requires a git reference".to_string(),
        ));
    }

    if let Some(pos) = diff_ref.find("..") {
        let base = &diff_ref[..pos];
        let target = &diff_ref[pos + 2..];

        if base.is_empty() {
            return Err(StyleGuardError::Config(
                "--diff range requires a base reference (e.g., 'main..feature', not '..feature')"
                    .to_string(),
            ));
        }

        let target = if target.is_empty() {
            "HEAD".to_string()
        } else {
            target.to_string()
        };

        Ok(DiffRange {
            base: base.to_string(),
            target,
        })
    } else {
        Ok(DiffRange {
            base: diff_ref.to_string(),
            target: "HEAD".to_string(),
        })
    }
}

/// Git changeset implementation using gix.
pub struct GitDiff {
    repo_path: PathBuf,
}

impl GitDiff {
    /// Create a new `GitDiff` for the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found or it has no working
    /// directory.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| StyleGuardError::Git(format!("Failed to discover git repository: {e}")))?;
        if repo.workdir().is_none() {
            return Err(StyleGuardError::Git(
                "Repository has no working directory".into(),
            ));
        }
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
        })
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| StyleGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn resolve_tree_paths(
        repo: &gix::Repository,
        reference: &str,
    ) -> Result<HashMap<String, gix::ObjectId>> {
        let commit = repo
            .rev_parse_single(reference)
            .map_err(|e| {
                StyleGuardError::Git(format!("Failed to parse reference '{reference}': {e}"))
            })?
            .object()
            .map_err(|e| {
                StyleGuardError::Git(format!("Failed to get object for '{reference}': {e}"))
            })?
            .peel_to_commit()
            .map_err(|e| {
                StyleGuardError::Git(format!("Failed to peel to commit '{reference}': {e}"))
            })?;
        let tree = commit.tree().map_err(|e| {
            StyleGuardError::Git(format!("Failed to get tree for '{reference}': {e}"))
        })?;

        let mut paths = HashMap::new();
        Self::collect_tree_paths(&tree, "", &mut paths)?;
        Ok(paths)
    }

    fn collect_tree_paths(
        tree: &gix::Tree<'_>,
        prefix: &str,
        paths: &mut HashMap<String, gix::ObjectId>,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry = entry
                .map_err(|e| StyleGuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| StyleGuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    paths.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry.object().map_err(|e| {
                        StyleGuardError::Git(format!("Failed to get subtree object: {e}"))
                    })?;
                    let subtree = subtree.into_tree();
                    Self::collect_tree_paths(&subtree, &path, paths)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Get the changeset between two git references.
    ///
    /// Entries are sorted by path so callers see a deterministic order.
    ///
    /// # Errors
    /// Returns an error if either reference cannot be parsed or the
    /// repository cannot be accessed.
    pub fn changes_between(&self, base_ref: &str, target_ref: &str) -> Result<Vec<ChangeEntry>> {
        let repo = self.open_repo()?;

        let base_paths = Self::resolve_tree_paths(&repo, base_ref)?;
        let target_paths = Self::resolve_tree_paths(&repo, target_ref)?;

        let mut changes = Vec::new();

        for (path, oid) in &target_paths {
            match base_paths.get(path) {
                None => changes.push(ChangeEntry {
                    path: path.clone(),
                    state: ChangeState::Added,
                }),
                Some(base_oid) if base_oid != oid => changes.push(ChangeEntry {
                    path: path.clone(),
                    state: ChangeState::Modified,
                }),
                Some(_) => {}
            }
        }

        for path in base_paths.keys() {
            if !target_paths.contains_key(path) {
                changes.push(ChangeEntry {
                    path: path.clone(),
                    state: ChangeState::Deleted,
                });
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(changes)
    }
}

impl ChangedFiles for GitDiff {
    fn changes_since(&self, base_ref: &str) -> Result<Vec<ChangeEntry>> {
        self.changes_between(base_ref, "HEAD")
    }
}
