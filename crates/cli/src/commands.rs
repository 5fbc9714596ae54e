//! Clap argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Seeded random integer resource
#[derive(Debug, Parser)]
#[command(name = "randint")]
#[command(about = "Generate, import and plan seeded random integer resources")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (default: ./randint.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print bare values instead of JSON
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a new state record
    Create(CreateArgs),

    /// Reconstruct a state record from `result,min,max[,seed]`
    Import {
        /// Import identifier
        id: String,
    },

    /// Execute one JSON command (read from stdin when omitted)
    Exec {
        /// JSON-encoded command
        json: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Destination (default: ./randint.toml)
        path: Option<PathBuf>,
    },
}

/// Desired state flags for `create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Minimum inclusive value of the range
    #[arg(long, allow_hyphen_values = true)]
    pub min: i64,

    /// Maximum inclusive value of the range
    #[arg(long, allow_hyphen_values = true)]
    pub max: i64,

    /// Custom seed to always produce the same value
    #[arg(long)]
    pub seed: Option<String>,

    /// Replacement-triggering keeper, as KEY=VALUE (repeatable)
    #[arg(long = "keeper", value_name = "KEY=VALUE")]
    pub keepers: Vec<String>,
}
