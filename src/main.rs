//! Triad - demo web backend
//!
//! Main entry point: initializes tracing, parses the CLI, loads
//! configuration, and dispatches to the command handlers.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use triad::cli::{Cli, Commands};
use triad::commands;
use triad::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!("Starting HTTP server");
            if let Some(h) = &host {
                tracing::debug!("Using host override: {}", h);
            }
            if let Some(p) = port {
                tracing::debug!("Using port override: {}", p);
            }

            commands::serve::run_serve(config, host, port).await?;
            Ok(())
        }
        Commands::Notes {
            query,
            max_results,
            json,
        } => {
            tracing::info!("Running notes query");
            if let Some(q) = &query {
                tracing::debug!("Filtering by query: {}", q);
            }

            commands::notes::run_notes(config, query, max_results, json).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triad=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
