mod diff;

pub use diff::{ChangeEntry, ChangeState, ChangedFiles, DiffRange, GitDiff, parse_diff_range};

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
