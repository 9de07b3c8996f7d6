//! versegrab CLI
//!
//! Fetches poem pages from registered sites and prints one document per
//! input URL, in input order.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use versegrab::{
    error::Result,
    models::Config,
    output::{self, OutputFormat},
    pipeline, sites,
    utils::http,
};

/// versegrab - poem extraction from known poetry sites
#[derive(Parser, Debug)]
#[command(
    name = "versegrab",
    version,
    about = "Extracts poem records from known poetry websites"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "versegrab.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and extract poems from one or more URLs
    Grab {
        /// Poem page URLs, processed in order
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output format (yaml or json)
        #[arg(long, default_value = "yaml")]
        format: String,

        /// Keep processing the batch after an unresolved URL
        #[arg(long)]
        continue_on_unresolved: bool,
    },

    /// List registered site handlers and their URL prefixes
    Sites,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Grab {
            urls,
            format,
            continue_on_unresolved,
        } => {
            let format: OutputFormat = format.parse()?;
            if continue_on_unresolved {
                config.batch.stop_on_unresolved = false;
            }
            config.validate()?;

            log::info!("Processing {} URL(s)", urls.len());
            let client = http::create_client(&config.fetch)?;
            let entries = pipeline::run_batch(&config, &client, &urls).await;

            let failures = entries.iter().filter(|e| e.is_error()).count();
            if failures > 0 {
                log::warn!("{failures} of {} URL(s) produced errors", entries.len());
            }

            print!("{}", output::render(&entries, format)?);
        }

        Command::Sites => {
            for handler in sites::REGISTRY {
                println!("{:<18} {}", handler.site.name(), handler.prefix);
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Config OK");
        }
    }

    Ok(())
}
