mod filter;
mod target;

pub use filter::PathFilter;
pub use target::{MAX_TARGET_CHARS, ScanTarget, resolve_targets};

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::git::ChangeEntry;
use crate::options::ToolOptions;
use crate::output::ToolProgress;
use crate::rules::{RuleSpec, resolve_config};
use crate::tool::{Issue, OUTPUT_CAPTURE_FILE, build_command, parse_output, run_tool};

/// Immutable description of one scan invocation.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Root of the stylesheet tree; also the tool's working directory.
    pub source_dir: PathBuf,
    /// Where the resolved rule config and the output capture land.
    /// Fixed file names: one scan per work dir at a time.
    pub work_dir: PathBuf,
    /// Scan only the changeset instead of the full corpus.
    pub incremental: bool,
    /// Rule-ids whose diagnostics are surfaced.
    pub allow_list: HashSet<String>,
    /// Exclusion globs, matched source-relative.
    pub exclusions: Vec<String>,
    /// Caller rule enablements merged into the rule config.
    pub rule_specs: Vec<RuleSpec>,
}

/// Runs the scan pipeline: resolver, rule config, command, process, parser.
pub struct Analyzer<'a> {
    options: &'a ToolOptions,
    verbose: u8,
    quiet: bool,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(options: &'a ToolOptions, verbose: u8, quiet: bool) -> Self {
        Self {
            options,
            verbose,
            quiet,
        }
    }

    /// Execute one scan.
    ///
    /// `changes` is the changeset from the version-control collaborator; it
    /// is only consulted for incremental requests. An incremental request
    /// that resolves to nothing returns an empty issue list without spawning
    /// the tool.
    ///
    /// # Errors
    /// Returns an error on invalid exclusion patterns, rule config
    /// resolution failure, launch failure, or a fatal tool signature.
    pub fn analyze(&self, request: &ScanRequest, changes: &[ChangeEntry]) -> Result<Vec<Issue>> {
        let filter = PathFilter::new(&request.exclusions)?;
        let Some(targets) = resolve_targets(
            &request.source_dir,
            request.incremental,
            changes,
            &filter,
        ) else {
            self.log(1, "nothing to scan in the changeset");
            return Ok(Vec::new());
        };

        let config_path = resolve_config(
            self.options,
            &request.work_dir,
            &request.allow_list,
            &request.rule_specs,
        )?;

        let command = build_command(
            self.options,
            config_path.as_deref(),
            targets,
            &request.exclusions,
        )?;
        self.log(1, &format!("scan command: {}", command.display()));

        let capture_path = request.work_dir.join(OUTPUT_CAPTURE_FILE);
        let progress = ToolProgress::new(self.quiet);
        let verbose = self.verbose;
        let run_result = run_tool(&command, &request.source_dir, &capture_path, |line| {
            if verbose > 0 {
                progress.println(line);
            }
        });
        progress.finish();
        let status = run_result?;
        if !status.success() {
            // expected whenever diagnostics exist; only worth a verbose note
            self.log(2, &format!("stylelint exited with {status}"));
        }

        parse_output(&capture_path, &request.allow_list)
    }

    fn log(&self, level: u8, message: &str) {
        if self.verbose >= level && !self.quiet {
            eprintln!("{message}");
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
