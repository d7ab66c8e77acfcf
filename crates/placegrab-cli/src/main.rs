mod collect;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use placegrab_core::SearchFailurePolicy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placegrab")]
#[command(about = "Export places search results with contact details to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every query, look up details for each hit, and write the CSV
    ///
    /// Columns: Category, Name, Phone, Address, Latitude, Longitude, Website,
    /// PlaceID. Earlier exports named the last column `Place ID`; consumers
    /// reading that header must be updated.
    Collect {
        /// Output CSV path (overrides PLACEGRAB_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,

        /// YAML file with a `queries:` list (overrides PLACEGRAB_QUERIES_PATH)
        #[arg(long)]
        queries: Option<PathBuf>,

        /// What to do when a search request fails: `abort` or `skip`
        #[arg(long)]
        on_search_error: Option<SearchFailurePolicy>,

        /// Print the plan without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the queries that would be searched and their category labels
    Queries {
        /// YAML file with a `queries:` list (overrides PLACEGRAB_QUERIES_PATH)
        #[arg(long)]
        queries: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is loaded here and nowhere else.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Collect {
            output,
            queries,
            on_search_error,
            dry_run,
        }) => {
            let mut config =
                placegrab_core::load_app_config().context("configuration error")?;
            init_tracing(&config.log_level)?;

            if let Some(path) = output {
                config.output_path = path;
            }
            if queries.is_some() {
                config.queries_path = queries;
            }
            if let Some(policy) = on_search_error {
                config.on_search_error = policy;
            }
            tracing::debug!(?config, "loaded configuration");

            collect::run_collect(&config, dry_run).await?;
        }
        Some(Commands::Queries { queries }) => {
            init_tracing("info")?;
            let path = queries.or_else(placegrab_core::queries_path_from_env);
            collect::print_queries(path.as_deref())?;
        }
        None => println!("nothing to do; run `placegrab collect` or see --help"),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `fallback` is used as the filter directive.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
