//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use termbase::SuggestionKind;

/// Termbase: vocabulary curation backend
#[derive(Parser)]
#[command(name = "termbase")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wipe and reload the vocabulary from a seed file
    Import {
        /// Path to the seed JSON file
        #[arg(value_name = "SEED_FILE")]
        seed: PathBuf,

        /// Path to the termbase document
        #[arg(short, long, default_value = "termbase.json")]
        data: PathBuf,

        /// Skip the timestamped backup of the previous document
        #[arg(long)]
        no_history: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Path to the termbase document
        #[arg(short, long, default_value = "termbase.json")]
        data: PathBuf,

        /// Port for the API server
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Show document contents and moderation progress
    Status {
        /// Path to the termbase document
        #[arg(short, long, default_value = "termbase.json")]
        data: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Batch accept or reject pending suggestions
    Batch {
        /// Path to the termbase document
        #[arg(short, long, default_value = "termbase.json")]
        data: PathBuf,

        /// Accept suggestions (cannot use with --reject)
        #[arg(long, conflicts_with = "reject")]
        accept: bool,

        /// Reject suggestions (cannot use with --accept)
        #[arg(long, conflicts_with = "accept")]
        reject: bool,

        /// Filter by suggestion kind (new_word, vocabulary)
        #[arg(long, short = 'k')]
        kind: Option<SuggestionKind>,

        /// Decide all pending suggestions
        #[arg(long)]
        all: bool,
    },
}
