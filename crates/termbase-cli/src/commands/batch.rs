//! Batch command - accept or reject pending suggestions in bulk.

use std::path::PathBuf;

use colored::Colorize;
use termbase::{SuggestionKind, Termbase};

pub fn run(
    data: PathBuf,
    accept: bool,
    reject: bool,
    kind: Option<SuggestionKind>,
    all: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !data.exists() {
        return Err(format!("Termbase document not found: {}", data.display()).into());
    }

    if !accept && !reject {
        return Err("Must specify --accept or --reject".into());
    }

    if !all && kind.is_none() {
        return Err("Must specify --all or --kind to select suggestions".into());
    }

    let mut base = Termbase::load(&data)?;

    let include = |k: SuggestionKind| kind.map_or(true, |selected| selected == k);

    let new_word_ids: Vec<String> = if include(SuggestionKind::NewWord) {
        base.pending_new_words().iter().map(|s| s.id.clone()).collect()
    } else {
        Vec::new()
    };
    let vocabulary_ids: Vec<String> = if include(SuggestionKind::Vocabulary) {
        base.pending_vocabulary_suggestions()
            .iter()
            .map(|s| s.id.clone())
            .collect()
    } else {
        Vec::new()
    };

    if new_word_ids.is_empty() && vocabulary_ids.is_empty() {
        println!("{} No pending suggestions match.", "Note:".yellow());
        return Ok(());
    }

    let action_word = if accept { "Accepting" } else { "Rejecting" };
    println!(
        "{} {} suggestion(s)...",
        action_word.cyan().bold(),
        (new_word_ids.len() + vocabulary_ids.len()).to_string().white().bold()
    );

    let mut count = 0;
    for id in &new_word_ids {
        if accept {
            let item = base.approve_new_word(id)?;
            if verbose {
                println!("  {} {} -> item {}", "•".dimmed(), id, item.id.white());
            }
        } else {
            base.reject_suggestion(id, SuggestionKind::NewWord)?;
            if verbose {
                println!("  {} {}", "•".dimmed(), id);
            }
        }
        count += 1;
    }
    for id in &vocabulary_ids {
        if accept {
            base.approve_vocabulary_suggestion(id)?;
        } else {
            base.reject_suggestion(id, SuggestionKind::Vocabulary)?;
        }
        if verbose {
            println!("  {} {}", "•".dimmed(), id);
        }
        count += 1;
    }

    base.save(&data)?;

    println!();
    println!(
        "{} {} suggestion(s) {}",
        "Done:".green().bold(),
        count.to_string().white().bold(),
        if accept { "accepted" } else { "rejected" }
    );

    let remaining = base.suggestions.counts().pending;
    if remaining > 0 {
        println!(
            "  {} pending suggestion(s) remaining",
            remaining.to_string().yellow()
        );
    } else {
        println!("  {} All suggestions have been decided!", "✓".green());
    }

    Ok(())
}
