//! Committee Search CLI
//!
//! Fetches the active committees and their rosters once, then serves the
//! search page or answers a single query from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use committees::{
    error::Result,
    models::Config,
    pipeline,
    search::search,
    server::{self, AppState},
    services::{DataSource, RemoteClient},
    storage::IndexStore,
};

/// Committee Search - find committees by member name, party or canton
#[derive(Parser, Debug)]
#[command(
    name = "committees",
    version,
    about = "Parliamentary committee member search"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// HTTP port to listen on (overrides server.port)
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all committees, then serve the search page (default)
    Serve,

    /// Fetch all committees and print a summary
    Fetch {
        /// Also list every member of each committee
        #[arg(long)]
        members: bool,
    },

    /// Fetch all committees and print the results of one query
    Search {
        /// Name, party or canton fragment
        query: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Fetch the committee index; any failure aborts the run.
async fn refresh(config: &Config) -> Result<(RemoteClient, Arc<IndexStore>)> {
    config.validate()?;
    let client = RemoteClient::new(&config.remote)?;
    let store = Arc::new(IndexStore::new());

    if let Err(e) = pipeline::run_refresh(&client, &store).await {
        log::error!("Refresh failed: {}", e);
        return Err(e);
    }
    Ok((client, store))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    init_logging(cli.verbose, &config.logging.level);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let (client, store) = refresh(&config).await?;
            let state = AppState::new(
                store,
                client.base_url().clone(),
                &config.server.template_path,
            );
            log::info!("started");
            server::serve(&config.server, state).await?;
        }

        Command::Fetch { members } => {
            let (_, store) = refresh(&config).await?;
            let index = store.snapshot();

            for (committee, details) in index.entries() {
                println!(
                    "{:>6}  {:<60} {:>3} members",
                    committee.id,
                    committee.name,
                    details.member_count()
                );
                if members {
                    for member in &details.members {
                        println!(
                            "{}",
                            member.format("        {last_name}, {first_name} ({party}, {canton})")
                        );
                    }
                }
            }
            log::info!(
                "{} committees, {} members",
                index.len(),
                index.member_count()
            );
        }

        Command::Search { query } => {
            let (client, store) = refresh(&config).await?;

            log::info!("search for {}", query);
            let results = search(&store.snapshot(), &query, client.base_url());
            for result in &results {
                println!(
                    "{:>3}. {:<60} {:>3}/{:<3} {}",
                    result.rank,
                    result.committee_name,
                    result.match_count,
                    result.member_count,
                    result.url
                );
            }
            log::info!("{} committees matched", results.len());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "committees",
            "search",
            "anna",
            "--config",
            "other.toml",
            "--port",
            "9000",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.port, Some(9000));
        assert!(matches!(cli.command, Some(Command::Search { ref query }) if query == "anna"));
    }

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["committees"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(cli.command.is_none());
    }
}
