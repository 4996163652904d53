//! Serve command - run the HTTP API server.

use std::path::PathBuf;

use colored::Colorize;
use termbase::Termbase;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::server::{app, state::AppState};

pub fn run(data: PathBuf, port: u16, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let base = if data.exists() {
        let base = Termbase::load(&data)?;
        info!(
            items = base.vocabulary.len(),
            suggestions = base.suggestions.len(),
            "loaded termbase document"
        );
        base
    } else {
        warn!(path = %data.display(), "no document found, starting empty");
        let base = Termbase::new();
        base.save(&data)?;
        base
    };

    let state = AppState::new(base, data.clone());

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting termbase server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Document: {}", data.display());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // Save once more on Ctrl+C before exiting.
        let state_clone = state.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            if let Err(e) = state_clone.save().await {
                eprintln!("Error saving: {}", e);
            }
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
