// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Bernstein CLI
//!
//! Command-line interface for the Bernstein control plane.

use clap::{Parser, Subcommand};

mod commands;

/// Bernstein - Node and container registry for a cluster control plane
#[derive(Parser)]
#[command(name = "bernstein")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Port the control plane listens on
    #[arg(long, env = "LISTEN_PORT")]
    pub listen_port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the control plane with an in-memory node registry
    Up,

    /// List the nodes a configuration file would seed
    List {
        /// Print the seeded registry snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Populate the environment from .env before clap reads LISTEN_PORT
    let dotenv_result = dotenv::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    // Dispatch to command handlers
    match cli.command {
        Commands::Up => commands::up::execute(cli.config.as_deref(), cli.listen_port).await,
        Commands::List { json } => commands::list::execute(cli.config.as_deref(), json).await,
        Commands::Validate { file } => commands::validate::execute(&file).await,
    }
}
