//! GameAware Control - CLI client for the GameAware assessment backend
//!
//! Runs the survey, shows results and history, and hosts the
//! recommendation view and chat assistant.

mod cli;
mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use gameaware_common::config::ClientConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GAMEAWARE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::load();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint.trim_end_matches('/').to_string();
    }

    match cli.command {
        Commands::Assess => commands::assess::run(&config).await,
        Commands::History { action } => commands::history::run(action),
        Commands::Recommend { level } => commands::recommend::run(level),
        Commands::Chat { level } => commands::chat::run(level),
        Commands::Login => commands::account::login(&config).await,
        Commands::Logout => commands::account::logout(),
        Commands::Register => commands::account::register(&config).await,
    }
}
