use clap::Parser;

use style_guard::cli::{Cli, Commands};
use style_guard::commands::{run_check, run_rules};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
    };

    std::process::exit(exit_code);
}
