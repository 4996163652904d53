//! Status command - show document contents and moderation progress.

use std::path::PathBuf;

use colored::Colorize;
use termbase::Termbase;

pub fn run(
    data: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !data.exists() {
        return Err(format!(
            "Termbase document not found: {}\nRun 'termbase import <seed.json>' first.",
            data.display()
        )
        .into());
    }

    let base = Termbase::load(&data)?;
    let summary = base.summary();

    if json_output {
        let status = serde_json::json!({
            "file": data.display().to_string(),
            "updated_at": base.updated_at.to_rfc3339(),
            "items": summary.items,
            "translations": summary.translations,
            "categories": summary.categories,
            "profiles": summary.profiles,
            "suggestions": {
                "total": summary.suggestions.total(),
                "pending": summary.suggestions.pending,
                "accepted": summary.suggestions.accepted,
                "rejected": summary.suggestions.rejected,
            },
            "seed": &base.seed,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!(
            "{} {}",
            "Termbase status for".cyan().bold(),
            data.display().to_string().white()
        );
        println!();

        println!("{}", "Vocabulary:".yellow().bold());
        println!("  Items:        {}", summary.items.to_string().white());
        println!("  Translations: {}", summary.translations.to_string().white());
        println!("  Categories:   {}", summary.categories.to_string().white());
        if let Some(seed) = &base.seed {
            println!(
                "  Seeded from:  {} ({} items)",
                seed.file.white(),
                seed.item_count
            );
        }
        println!();

        // Moderation progress bar
        let total = summary.suggestions.total();
        let decided = summary.suggestions.decided();
        let progress = if total == 0 {
            1.0
        } else {
            decided as f64 / total as f64
        };
        let bar_width = 30;
        let filled = (progress * bar_width as f64).round() as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

        println!("{}", "Moderation:".yellow().bold());
        println!(
            "  Progress: {} {}/{} ({:.0}%)",
            bar.cyan(),
            decided.to_string().white().bold(),
            total,
            progress * 100.0
        );
        println!("  Pending:  {}", summary.suggestions.pending.to_string().white());
        println!("  Accepted: {}", summary.suggestions.accepted.to_string().green());
        println!("  Rejected: {}", summary.suggestions.rejected.to_string().red());
        println!();

        println!("{}", "Engagement:".yellow().bold());
        println!("  Profiles: {}", summary.profiles.to_string().white());
        println!();

        if verbose && summary.suggestions.pending > 0 {
            println!("{}", "Pending suggestions:".yellow().bold());
            for sug in base.suggestions.all() {
                if sug.status() != termbase::SuggestionStatus::Pending {
                    continue;
                }
                let detail = match sug {
                    termbase::SuggestionRef::NewWord(s) => {
                        format!("new word '{}' [{}]", s.term, s.language)
                    }
                    termbase::SuggestionRef::Vocabulary(s) => {
                        format!("{} '{}' for item {}", s.proposal, s.text, s.item_id)
                    }
                };
                println!(
                    "  {} {} - {} ({} likes)",
                    "•".dimmed(),
                    sug.id(),
                    detail,
                    sug.like_count()
                );
            }
            println!();
        }

        if summary.suggestions.pending > 0 {
            println!(
                "Run {} to review pending suggestions.",
                "termbase serve".cyan().bold()
            );
        } else if total > 0 {
            println!("{}", "All suggestions have been decided!".green().bold());
        }
    }

    Ok(())
}
