//! countypop CLI - Find the county whose population is closest to a target.

use anyhow::Result;
use clap::{Parser, Subcommand};
use countypop_lib::DEFAULT_MAX_ABS_DISTANCE;
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

/// Year the default query runs against.
const DEFAULT_YEAR: i32 = 2020;

#[derive(Parser)]
#[command(name = "countypop")]
#[command(
    about = "Find the county whose population is closest to a target",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data API endpoint. Defaults to DataUSA population by county.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read records from a local JSON file instead of the API
    #[arg(long, global = true, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", global = true, default_value_t = 30)]
    timeout: u64,

    /// Retry attempts for failed requests
    #[arg(long, value_name = "N", global = true, default_value_t = 3)]
    retries: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the county closest to a target population (the default command)
    Closest {
        /// Year to search within
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        /// Maximum allowed distance between target and match
        #[arg(short, long, default_value_t = DEFAULT_MAX_ABS_DISTANCE, allow_negative_numbers = true)]
        margin: f64,

        /// Target population. Defaults to the year's average.
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Print the average county population for a year
    Average {
        /// Year to average over
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: i32,
    },

    /// List county records
    List {
        /// Only list records for this year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

impl Commands {
    /// The command run when none is given: closest to the 2020 average.
    const fn default_closest() -> Self {
        Self::Closest {
            year: DEFAULT_YEAR,
            margin: DEFAULT_MAX_ABS_DISTANCE,
            target: None,
            format: Format::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = commands::client_config(cli.timeout, cli.retries);
    let source = commands::record_source(cli.url, cli.input, config)?;
    let query = commands::load_query(source.as_ref(), cli.quiet).await?;

    let command = cli.command.unwrap_or_else(Commands::default_closest);

    match command {
        Commands::Closest {
            year,
            margin,
            target,
            format,
        } => commands::closest::closest(&query, year, margin, target, format),
        Commands::Average { year } => commands::average::average(&query, year),
        Commands::List { year } => commands::list::list_records(&query, year),
    }
}
