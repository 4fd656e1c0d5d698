mod check;
mod rules_cmd;

pub use check::run_check;
pub use rules_cmd::run_rules;

use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::ColorMode;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

pub(crate) fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub(crate) fn warn_empty_allow_list(cli: &Cli) {
    if !cli.quiet {
        eprintln!(
            "Warning: the rule allow-list is empty; every diagnostic will be filtered out. \
             Set `rules` in .style-guard.toml or pass --rules."
        );
    }
}
