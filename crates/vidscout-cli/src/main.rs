use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, history, listing};
use vidscout_models::{LengthBucket, VideoClass};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "vidscout")]
#[command(about = "vidscout - browse, rank, and track videos from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for videos and print a ranked listing
    #[command(long_about = "Search for videos matching a free-text query, rank them by rating, and print the result. A search with no hits is retried once with just the first word of the query.")]
    Search {
        /// Free-text search query
        query: String,

        /// Filter by video length (all, short, medium, long)
        #[arg(long, default_value = "all")]
        length: LengthBucket,
    },

    /// Print a ranked listing of currently-trending videos
    Trending {
        /// Region code to scope trending to (e.g. US, ES, IN)
        #[arg(long)]
        region: Option<String>,

        /// Filter by video length (all, short, medium, long)
        #[arg(long, default_value = "all")]
        length: LengthBucket,
    },

    /// Interactive browsing session with watch tracking and points
    #[command(long_about = "Start an interactive session: search or browse trending, mark videos watched (+20 points each), queue them for later, and review session history. Session state and points are discarded on exit; use 'history' for the durable ledger.")]
    Browse {
        /// Region code for trending listings
        #[arg(long)]
        region: Option<String>,
    },

    /// Inspect or update the durable watch ledger
    History {
        #[command(subcommand)]
        cmd: HistoryCommands,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Show recorded videos and accumulated points
    Show,

    /// Record a finished video (short: +5 points, long: +10 points)
    Record {
        /// Video class: short or long
        class: VideoClass,

        /// Video name to record
        name: String,
    },

    /// Reset the ledger's point counter to zero
    ResetPoints,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (API key is masked)
    Show,

    /// Set the YouTube Data API key
    SetKey {
        /// The API key
        key: String,
    },

    /// Set the default trending region (omit CODE to clear)
    SetRegion {
        /// Region code, e.g. US
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Search { query, length } => listing::run_search(&query, length, &output).await,
        Commands::Trending { region, length } => {
            listing::run_trending(region.as_deref(), length, &output).await
        }
        Commands::Browse { region } => browse::run_browse(region, &output).await,
        Commands::History { cmd } => match cmd {
            HistoryCommands::Show => history::run_show(&output),
            HistoryCommands::Record { class, name } => history::run_record(class, &name, &output),
            HistoryCommands::ResetPoints => history::run_reset_points(&output),
        },
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::run_show(&output),
            ConfigCommands::SetKey { key } => config::run_set_key(&key, &output),
            ConfigCommands::SetRegion { code } => config::run_set_region(code, &output),
        },
    }
}
