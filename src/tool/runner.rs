use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, StyleGuardError};

use super::command::ScanCommand;

/// Fixed name of the stdout capture file under the work dir.
pub const OUTPUT_CAPTURE_FILE: &str = "stylelint-output.txt";

/// stderr signature of a Node heap exhaustion.
const HEAP_EXHAUSTED_SIGNATURE: &str = "JavaScript heap out of memory";
/// stderr signature of the Node maximum-string-length overflow.
const STRING_LENGTH_SIGNATURE: &str = "RangeError: Invalid string length";

/// Check one stderr line for the known fatal runtime signatures.
///
/// # Errors
/// Returns the matching `FatalTool` error when a signature is present.
pub fn check_fatal_signature(line: &str) -> Result<()> {
    if line.contains(HEAP_EXHAUSTED_SIGNATURE) {
        return Err(StyleGuardError::heap_exhausted());
    }
    if line.contains(STRING_LENGTH_SIGNATURE) {
        return Err(StyleGuardError::string_length_exceeded());
    }
    Ok(())
}

/// Execute the tool, blocking until it exits.
///
/// stdout is redirected into the capture file; stderr is consumed
/// line-by-line on the calling thread, handed to `on_stderr_line`, and
/// checked for the fatal signatures. A signature match kills the child and
/// aborts. A non-zero exit is not an error (the tool legitimately exits
/// non-zero when diagnostics are found); the status is only returned for
/// logging.
///
/// # Errors
/// Returns `ToolLaunch` when the process cannot be spawned, `FatalTool` on a
/// signature match, or an I/O error from the capture file or the stderr pipe.
pub fn run_tool<F>(
    command: &ScanCommand,
    source_dir: &Path,
    capture_path: &Path,
    mut on_stderr_line: F,
) -> Result<ExitStatus>
where
    F: FnMut(&str),
{
    let capture = File::create(capture_path)?;

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .current_dir(source_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(capture))
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| StyleGuardError::ToolLaunch {
            program: command.program.to_string_lossy().to_string(),
            source: e,
        })?;

    if let Some(stderr) = child.stderr.take() {
        let reader = BufReader::new(stderr);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            };
            on_stderr_line(&line);
            if let Err(fatal) = check_fatal_signature(&line) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(fatal);
            }
        }
    }

    Ok(child.wait()?)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
