//! gamescout CLI
//!
//! Command-line interface for searching monthly game releases, adding AI
//! reviews and exporting the results.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod progress;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Search { year, month, query } => {
            commands::search::run_search(year, month, &query, cli.output_dir, cli.quiet)
        }
        Commands::Random {
            min_year,
            max_year,
            query,
        } => commands::search::run_random(min_year, max_year, &query, cli.output_dir, cli.quiet),
        Commands::Formats => commands::formats::run_formats(cli.output_dir),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
