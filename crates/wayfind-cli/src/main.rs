mod query;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfind_places::PlacesService;

use crate::query::{NearbyArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "wayfind")]
#[command(about = "Place search over the Google Places API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the MCP tool server on stdin/stdout
    Mcp,
    /// Free-text place search
    Search(SearchArgs),
    /// Places of one type around a point
    Nearby(NearbyArgs),
    /// Full details for a place id
    Details {
        /// Place id returned by a search
        place_id: String,
    },
    /// List the supported place types
    Types,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Types) {
        return query::print_json(&wayfind_core::PLACE_TYPES);
    }

    let config = wayfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries results and MCP frames.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let places = PlacesService::from_config(&config)?;
    match cli.command {
        Commands::Mcp => wayfind_mcp::run_stdio(places).await?,
        Commands::Search(args) => query::run_search(&places, &args).await?,
        Commands::Nearby(args) => query::run_nearby(&places, &args).await?,
        Commands::Details { place_id } => query::run_details(&places, &place_id).await?,
        Commands::Types => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests;
