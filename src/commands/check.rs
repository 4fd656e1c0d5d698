use std::collections::HashSet;
use std::fs;

use crate::cli::{CheckArgs, Cli};
use crate::error::Result;
use crate::git::{GitDiff, parse_diff_range};
use crate::options::ToolOptions;
use crate::output::formatter_for;
use crate::scan::{Analyzer, ScanRequest};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::{color_choice_to_mode, load_config, warn_empty_allow_list};

pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load task configuration and apply CLI overrides
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let allow_list: HashSet<String> = args
        .rules
        .clone()
        .unwrap_or_else(|| config.rules.clone())
        .into_iter()
        .collect();
    if allow_list.is_empty() {
        warn_empty_allow_list(cli);
    }

    let mut exclusions = config.scan.exclude.clone();
    exclusions.extend(args.exclude.iter().cloned());

    let source_dir = dunce::canonicalize(&args.source_dir)?;
    let work_dir = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    // 2. Fetch the changeset when scanning incrementally
    let incremental = args.diff.is_some();
    let changes = match &args.diff {
        Some(diff_ref) => {
            let range = parse_diff_range(diff_ref)?;
            let git_diff = GitDiff::discover(&source_dir)?;
            git_diff.changes_between(&range.base, &range.target)?
        }
        None => Vec::new(),
    };

    // 3. Run the pipeline
    let options = ToolOptions::from_env();
    let request = ScanRequest {
        source_dir,
        work_dir,
        incremental,
        allow_list,
        exclusions,
        rule_specs: config.rule.clone(),
    };
    let analyzer = Analyzer::new(&options, cli.verbose, cli.quiet);
    let issues = analyzer.analyze(&request, &changes)?;

    // 4. Format and emit
    let format = args.format.unwrap_or(config.output.format);
    let formatter = formatter_for(format, color_choice_to_mode(cli.color));
    let rendered = formatter.format(&issues)?;
    write_output(&rendered, args.output.as_deref())?;

    Ok(if issues.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES_FOUND
    })
}

fn write_output(rendered: &str, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
