//! Import command - wipe and reload the vocabulary from a seed file.

use std::path::PathBuf;

use colored::Colorize;
use termbase::Termbase;

pub fn run(
    seed: PathBuf,
    data: PathBuf,
    no_history: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !seed.exists() {
        return Err(format!("Seed file not found: {}", seed.display()).into());
    }

    let mut base = if data.exists() {
        if verbose {
            println!("Loading existing document from {}", data.display());
        }
        Termbase::load(&data)?
    } else {
        Termbase::new()
    };

    let report = base.reseed_from_file(&seed)?;

    if no_history {
        base.save(&data)?;
    } else {
        base.save_with_history(&data)?;
    }

    println!(
        "{} {} item(s), {} translation(s) from {}",
        "Imported:".green().bold(),
        report.items.to_string().white().bold(),
        report.translations.to_string().white(),
        seed.display()
    );
    if report.replaced > 0 {
        println!(
            "  {} previous item(s) replaced",
            report.replaced.to_string().yellow()
        );
    }
    if verbose {
        if let Some(meta) = &base.seed {
            println!("  Seed hash: {}", meta.hash);
        }
    }
    println!("  Document: {}", data.display());

    Ok(())
}
