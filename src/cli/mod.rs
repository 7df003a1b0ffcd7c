//! Command-line interface.

pub mod apply;
pub mod completions;
pub mod destroy;
pub mod encrypt;
pub mod init;
pub mod output;
pub mod plan;
pub mod schema;
pub mod show;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::constants;

/// Saltseal - declarative anonymous sealed-box encryption.
#[derive(Parser)]
#[command(
    name = "saltseal",
    about = "Seal secrets to a public key and keep the result stable across runs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub paths: Paths,
}

/// Locations of the configuration and state files.
#[derive(Args, Debug, Clone)]
pub struct Paths {
    /// Configuration file
    #[arg(long, global = true, env = "SALTSEAL_CONFIG", default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// State file
    #[arg(long, global = true, env = "SALTSEAL_STATE", default_value = constants::STATE_FILE)]
    pub state: PathBuf,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a skeleton configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Encrypt a value once, without touching state
    Encrypt {
        /// Recipient public key, base64 (32 bytes decoded)
        #[arg(long)]
        public_key: String,
        /// Content to encrypt, base64
        #[arg(long, conflicts_with = "text", required_unless_present = "text")]
        content: Option<String>,
        /// Content to encrypt, raw text
        #[arg(long)]
        text: Option<String>,
        /// Accept public keys of the wrong length (zero-fill / truncate)
        #[arg(long)]
        lenient: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what apply would change
    Plan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reconcile declared items into the state file
    Apply {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored items
    Show {
        /// Item name (all items if omitted)
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print sensitive attributes
        #[arg(long)]
        reveal: bool,
    },

    /// Remove items from the state file
    Destroy {
        /// Item name (all items if omitted)
        name: Option<String>,
    },

    /// Print the item attribute table
    Schema {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, paths: &Paths) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { force } => init::execute(&paths.config, force),
        Encrypt {
            public_key,
            content,
            text,
            lenient,
            json,
        } => encrypt::execute(&public_key, content.as_deref(), text.as_deref(), lenient, json),
        Plan { json } => plan::execute(paths, json),
        Apply { json } => apply::execute(paths, json),
        Show { name, json, reveal } => show::execute(paths, name.as_deref(), json, reveal),
        Destroy { name } => destroy::execute(paths, name.as_deref()),
        Schema { json } => schema::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
