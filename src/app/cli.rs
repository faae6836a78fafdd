//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SwipeHire - Replay and inspect swipe-card gesture traces
#[derive(Parser, Debug)]
#[command(name = "swipehire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a gesture trace through the engine and report the decision
    Replay {
        /// Input trace file
        #[arg(short, long)]
        input: PathBuf,

        /// Optional job feed (JSON array); the decision is applied to its top card
        #[arg(short, long)]
        feed: Option<PathBuf>,
    },

    /// Validate a gesture trace file
    Validate {
        /// Path to the trace file
        trace: PathBuf,
    },

    /// List recorded traces
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Delete a trace
    Delete {
        /// Trace name to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "gesture.commit_threshold_px")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the traces directory
    pub fn traces_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".swipehire").join("traces"))
            .unwrap_or_else(|| PathBuf::from("traces"))
    }
}
