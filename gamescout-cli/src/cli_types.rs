//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamescout_lib::SortOrder;

#[derive(Parser)]
#[command(name = "gamescout")]
#[command(
    about = "Search monthly game releases, add AI reviews, export the results",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory exports are written to (default: config file, then ./games)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the search commands.
#[derive(Args, Clone)]
pub(crate) struct QueryArgs {
    /// Keep only games on these platforms (substring match, e.g. pc,switch)
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Option<Vec<String>>,

    /// Generate an AI review and rating for every game
    #[arg(short, long)]
    pub reviews: bool,

    /// Result order: upstream, date, title, title-desc, platform
    #[arg(short, long, default_value = "upstream")]
    pub sort: SortOrder,

    /// Export the results in this format (see `gamescout formats`)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Export filename without extension (default: games_results_<year>_<month>)
    #[arg(short, long, requires = "format")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search the games released in one month
    Search {
        /// Release year (e.g. 2023)
        #[arg(short, long)]
        year: i32,

        /// Release month, 1-12
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Search a random month of a random year in a range
    Random {
        /// Earliest year to pick from
        #[arg(long, default_value_t = 1980)]
        min_year: i32,

        /// Latest year to pick from
        #[arg(long, default_value_t = 2024)]
        max_year: i32,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List export formats and whether they are available
    Formats,

    /// Inspect API key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each came from (secrets masked)
    Show,
    /// Print the config file path
    Path,
}
