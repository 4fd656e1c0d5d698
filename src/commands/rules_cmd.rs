use std::collections::HashSet;

use crate::cli::{Cli, RulesArgs};
use crate::error::Result;
use crate::options::ToolOptions;
use crate::rules::resolve_config;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::load_config;

/// Resolve the effective stylelint rule config and print it, without
/// launching the tool.
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let allow_list: HashSet<String> = args
        .rules
        .clone()
        .unwrap_or_else(|| config.rules.clone())
        .into_iter()
        .collect();

    let work_dir = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let options = ToolOptions::from_env();
    match resolve_config(&options, &work_dir, &allow_list, &config.rule)? {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            if !cli.quiet {
                eprintln!("Resolved rule config: {}", path.display());
            }
            println!("{content}");
        }
        None => {
            println!("No managed rule config: stylelint will use the repository's own config.");
        }
    }

    Ok(EXIT_SUCCESS)
}
