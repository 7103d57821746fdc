//! Command-line interface definition for Triad

use clap::{Parser, Subcommand};

/// Demo web backend exposing todo, chat, and notes slices
#[derive(Debug, Parser)]
#[command(name = "triad", version, about)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true, env = "TRIAD_CONFIG")]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the in-process notes query and print the results
    Notes {
        /// Case-insensitive substring to filter by
        #[arg(short, long)]
        query: Option<String>,

        /// Cap on returned notes (must be at least 1)
        #[arg(long)]
        max_results: Option<u32>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
