//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// GameAware CLI
#[derive(Parser)]
#[command(name = "gameawarectl")]
#[command(about = "GameAware - Gaming addiction self-assessment", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Backend endpoint (overrides $GAMEAWARE_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Take the assessment: age check, survey, score and result
    Assess,

    /// Show past assessment results
    History {
        #[command(subcommand)]
        action: Option<HistoryCommands>,
    },

    /// Show recommendations for an addiction level
    Recommend {
        /// Level label (e.g. "Moderate Addiction"); defaults to your
        /// latest result
        #[arg(long)]
        level: Option<String>,
    },

    /// Chat with the gaming addiction assistant
    Chat {
        /// Level label to bind the conversation to; defaults to your
        /// latest result
        #[arg(long)]
        level: Option<String>,
    },

    /// Log in to the backend and make results follow your account
    Login,

    /// Log out; later results are filed under the guest scope
    Logout,

    /// Create a backend account
    Register,
}

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Erase all recorded results for the active user (irreversible)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
