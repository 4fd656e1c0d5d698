//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Install a fake `stylelint` executable into `dir`.
///
/// The fake replays canned content: `FAKE_STYLELINT_STDOUT` names a file to
/// copy to stdout, `FAKE_STYLELINT_STDERR` one for stderr, and
/// `FAKE_STYLELINT_EXIT` sets the exit code (default 0).
#[cfg(unix)]
pub fn install_fake_stylelint(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("stylelint");
    std::fs::write(
        &script,
        "#!/bin/sh\n\
         if [ -n \"$FAKE_STYLELINT_STDOUT\" ]; then\n\
         \tcat \"$FAKE_STYLELINT_STDOUT\"\n\
         fi\n\
         if [ -n \"$FAKE_STYLELINT_STDERR\" ]; then\n\
         \tcat \"$FAKE_STYLELINT_STDERR\" 1>&2\n\
         fi\n\
         exit \"${FAKE_STYLELINT_EXIT:-0}\"\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}

/// PATH value with `dir` prepended to the current PATH.
pub fn path_with(dir: &Path) -> std::ffi::OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![dir.to_path_buf()];
    paths.extend(std::env::split_paths(&current));
    std::env::join_paths(paths).unwrap()
}

/// A scratch layout for one scan: separate source, work, and tool dirs.
pub struct ScanFixture {
    pub source: TempDir,
    pub work: TempDir,
    pub tool: TempDir,
}

impl ScanFixture {
    pub fn new() -> Self {
        Self {
            source: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
            tool: TempDir::new().unwrap(),
        }
    }

    /// Write a canned tool-output file and return its path.
    pub fn canned_output(&self, content: &str) -> PathBuf {
        let path = self.tool.path().join("canned-output.txt");
        std::fs::write(&path, content).unwrap();
        path
    }
}
