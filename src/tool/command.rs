use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};
use crate::options::{ENV_MAX_OLD_SPACE_SIZE, ENV_NODE_HOME, ToolOptions};
use crate::scan::ScanTarget;

/// Installed executable name used when no heap override is in play.
const TOOL_BINARY: &str = "stylelint";
/// Runtime interpreter used when a heap override requires explicit flags.
const RUNTIME_BINARY: &str = "node";

/// A fully assembled argument vector for one tool invocation.
///
/// The vector goes to the OS exec layer unmodified and never through a
/// shell, so values carry no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl ScanCommand {
    fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    fn arg(&mut self, arg: impl Into<OsString>) {
        self.args.push(arg.into());
    }

    /// Single-line rendering for logs.
    #[must_use]
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().to_string()));
        parts.join(" ")
    }
}

/// Assemble the tool command line.
///
/// With a heap override the runtime interpreter is invoked directly with an
/// explicit heap flag and the install-layout path of the tool's entry script;
/// otherwise the installed executable is used. Safety flags are always
/// appended: empty input after the tool's own expansion must not fail, and
/// inline disable comments must not suppress diagnostics.
///
/// # Errors
/// Returns an error if a heap override is requested without a runtime
/// install dir to locate the entry script.
pub fn build_command(
    options: &ToolOptions,
    config_path: Option<&Path>,
    target: ScanTarget,
    exclusions: &[String],
) -> Result<ScanCommand> {
    let mut command = if let Some(heap_mb) = &options.max_old_space_size {
        let node_home = options.node_home.as_deref().ok_or_else(|| {
            StyleGuardError::Config(format!(
                "{ENV_MAX_OLD_SPACE_SIZE} requires {ENV_NODE_HOME} to locate the stylelint entry script"
            ))
        })?;
        let mut command = ScanCommand::new(RUNTIME_BINARY);
        command.arg(format!("--max-old-space-size={heap_mb}"));
        command.arg(entry_script(node_home));
        command
    } else {
        ScanCommand::new(TOOL_BINARY)
    };

    command.arg("--allow-empty-input");
    command.arg("--ignore-disables");

    if let Some(config) = config_path {
        command.arg("--config");
        command.arg(config);
    }

    if let Some(syntax) = &options.syntax {
        command.arg("--syntax");
        command.arg(syntax);
    }
    if let Some(custom_syntax) = &options.custom_syntax {
        command.arg("--custom-syntax");
        command.arg(custom_syntax);
    }

    for path in target.into_args() {
        command.arg(path);
    }

    for pattern in exclusions {
        command.arg("--ignore-pattern");
        command.arg(pattern);
    }

    Ok(command)
}

fn entry_script(node_home: &str) -> PathBuf {
    entry_script_in(node_home, cfg!(windows))
}

/// Entry-script location for the two install layouts.
fn entry_script_in(node_home: &str, windows_layout: bool) -> PathBuf {
    let base = Path::new(node_home);
    if windows_layout {
        base.join("node_modules")
            .join("stylelint")
            .join("bin")
            .join("stylelint.js")
    } else {
        base.join("lib")
            .join("node_modules")
            .join("stylelint")
            .join("bin")
            .join("stylelint.js")
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
