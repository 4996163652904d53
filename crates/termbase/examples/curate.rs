//! Example: Walk a termbase through the full suggestion lifecycle.
//!
//! Usage:
//!   cargo run --example curate

use std::collections::BTreeMap;

use termbase::{NewWordDraft, Role, SuggestionKind, Termbase};

fn main() -> termbase::Result<()> {
    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Termbase curation walkthrough");
    println!("{}", separator);
    println!();

    let mut base = Termbase::new();
    base.profiles.ensure("ana", Role::Interpreter);
    base.profiles.ensure("marta", Role::Overseer);

    // Author a couple of items directly.
    let translations: BTreeMap<String, String> = [
        ("es".to_string(), "sepsis".to_string()),
        ("pt".to_string(), "sepse".to_string()),
    ]
    .into_iter()
    .collect();
    base.author_item(
        "Sepsis",
        "A life-threatening response to infection.",
        "conditions",
        &translations,
    )?;

    // Users submit proposals.
    let word_id = base
        .submit_new_word(&NewWordDraft {
            term: "Triage".to_string(),
            definition: "Sorting patients by urgency.".to_string(),
            translation: "triaje".to_string(),
            language: "es".to_string(),
            category: "procedures".to_string(),
        })?
        .id
        .clone();

    let colloquial_id = base
        .submit_for_term("Sepsis", "colloquial", "blood poisoning", "en")?
        .id
        .clone();

    base.toggle_like(&word_id, SuggestionKind::NewWord, "ana")?;

    println!("## Pending suggestions");
    for sug in base.pending_new_words() {
        println!("  [{}] new word '{}' ({} likes)", sug.id, sug.term, sug.like_count());
    }
    for sug in base.pending_vocabulary_suggestions() {
        println!(
            "  [{}] {} '{}' for item {}",
            sug.id,
            sug.proposal.label(),
            sug.text,
            sug.item_id
        );
    }
    println!();

    // The moderator decides.
    let item = base.approve_new_word(&word_id)?;
    println!("Approved '{}' -> vocabulary item {}", item.term, item.id);

    let item = base.approve_vocabulary_suggestion(&colloquial_id)?;
    println!("Approved colloquial term on '{}'", item.term);
    println!();

    // Summarize the document.
    let summary = base.summary();
    println!("## Summary");
    println!("  Items:        {}", summary.items);
    println!("  Translations: {}", summary.translations);
    println!("  Categories:   {}", summary.categories);
    println!(
        "  Suggestions:  {} total, {} accepted, {} rejected",
        summary.suggestions.total(),
        summary.suggestions.accepted,
        summary.suggestions.rejected
    );
    println!();
    println!("{}", separator);

    Ok(())
}
