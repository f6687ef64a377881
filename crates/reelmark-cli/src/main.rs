use clap::{ArgAction, Parser, Subcommand};
use commands::{config, search, session};
use watchlist_config::{Config, PathManager};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelmark")]
#[command(about = "reelmark - Search movies, keep a watchlist, rate what you've seen")]
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
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive watchlist session (default)
    #[command(long_about = "Start an interactive session: search the catalog, add results to your watchlist, mark titles watched and rate or review them. The watchlist lives for the duration of the session only.")]
    Session,
    /// Search the catalog once and print the results
    #[command(long_about = "Run a single catalog search and print the results. Useful for scripting together with --output json.")]
    Search {
        /// Search terms (joined with spaces)
        #[arg(value_name = "QUERY", required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Manage configuration and the catalog API key
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Store the OMDb API key in the credentials file
    #[command(name = "api-key")]
    #[command(long_about = "Store the OMDb API key in the credentials file. Get a free key at https://www.omdbapi.com/apikey.aspx. The OMDB_API_KEY environment variable takes precedence over the stored key.")]
    ApiKey {
        /// API key (if not provided, will prompt)
        key: Option<String>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Session);

    let path_manager = PathManager::default();
    let app_config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", path_manager.config_file().display(), e))?;

    // Prompts own the terminal during a session, so its logs go to a file
    let log_file = match command {
        Commands::Session if app_config.logging.file => Some(path_manager.session_log_file()),
        _ => None,
    };
    logging::init_logging_with_file(cli.verbose, cli.quiet, &app_config.logging.level, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match command {
        Commands::Session => session::run_session(&app_config, &path_manager, &output).await,
        Commands::Search { query } => search::run_search(&query.join(" "), &app_config, &path_manager, &output).await,
        Commands::Config { cmd } => config::run_config(cmd, &app_config, &path_manager, &output),
    }
}
