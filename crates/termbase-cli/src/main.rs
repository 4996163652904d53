//! Termbase CLI - vocabulary curation backend.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            seed,
            data,
            no_history,
        } => commands::import::run(seed, data, no_history, cli.verbose),

        Commands::Serve { data, port } => commands::serve::run(data, port, cli.verbose),

        Commands::Status { data, json } => commands::status::run(data, json, cli.verbose),

        Commands::Batch {
            data,
            accept,
            reject,
            kind,
            all,
        } => commands::batch::run(data, accept, reject, kind, all, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
