//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parley CLI
#[derive(Parser, Debug)]
#[command(name = "parleyctl")]
#[command(about = "Parley - scripted chat assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/parley/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for reproducible replies
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the response speed (fast, normal, slow)
    #[arg(long, global = true)]
    pub speed: Option<String>,

    /// Write the chat history as JSON when the REPL exits
    #[arg(long, global = true)]
    pub transcript: Option<PathBuf>,

    /// Subcommand (if not provided, starts the chat REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Interactive chat session
    Chat,

    /// Ask a single question and print the reply
    Ask {
        /// The message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the reply with its classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file if none exists
    Init,
}
