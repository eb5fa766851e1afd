//! rom-tidy CLI
//!
//! Deduplicates ROM collections by title and copies the best copy of each
//! game into a per-platform output tree.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Organize {
            dry_run,
            output,
            platforms,
            regions,
        } => commands::organize::run_organize(
            cli.root, dry_run, output, platforms, &regions, cli.quiet,
        ),
        Commands::Inspect { names } => {
            commands::inspect::run_inspect(&names);
            Ok(())
        }
        Commands::List => {
            commands::list::run_list();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set {
                regions,
                clear_region,
            } => commands::config::run_config_set(&regions, clear_region),
        },
    }
}
