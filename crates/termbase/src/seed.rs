//! Bulk seed import - wipe-then-reload of the vocabulary store.
//!
//! Seeding replaces every vocabulary item from a JSON file of records with
//! nested translation maps. It is a batch collaborator meant to run from the
//! CLI, never from a request handler. Suggestions and profiles survive a
//! reseed; bookmarks pointing at removed items simply stop resolving.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, TermbaseError};
use crate::language;
use crate::termbase::Termbase;
use crate::vocabulary::{TranslationFlags, VocabularyStore};

/// One record in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    /// Item identifier, supplied by the seed data.
    pub id: String,

    /// Display text of the term.
    pub term: String,

    /// Long-form definition.
    #[serde(default)]
    pub definition: String,

    /// Grouping label.
    pub category: String,

    /// Primary translation per language (language → text).
    #[serde(default)]
    pub translations: BTreeMap<String, String>,

    /// Expanded form when the term is an acronym; stored as one extra
    /// English translation with no flags set.
    #[serde(rename = "acronymExtendedName", default)]
    pub acronym_extended_name: Option<String>,
}

/// Provenance of the last seed import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMetadata {
    /// File name without path.
    pub file: String,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// Number of items imported.
    pub item_count: usize,
    /// When the import ran.
    pub imported_at: DateTime<Utc>,
}

/// Counts reported by a completed reseed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedReport {
    /// Items loaded.
    pub items: usize,
    /// Translation rows loaded.
    pub translations: usize,
    /// Items previously in the store.
    pub replaced: usize,
}

impl Termbase {
    /// Reseed the vocabulary from a JSON file.
    ///
    /// The whole load is staged into a fresh store; the existing vocabulary
    /// is only swapped out once every record has validated.
    pub fn reseed_from_file(&mut self, path: impl AsRef<Path>) -> Result<SeedReport> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TermbaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let items: Vec<SeedItem> = serde_json::from_slice(&bytes)?;

        let metadata = SeedMetadata {
            file: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            hash: format!("{:x}", Sha256::digest(&bytes)),
            item_count: items.len(),
            imported_at: Utc::now(),
        };

        self.reseed(&items, Some(metadata))
    }

    /// Reseed the vocabulary from parsed records.
    pub fn reseed(&mut self, items: &[SeedItem], metadata: Option<SeedMetadata>) -> Result<SeedReport> {
        let mut staged = VocabularyStore::new();

        for item in items {
            staged.create_item(
                item.term.trim(),
                item.definition.trim(),
                item.category.trim(),
                Some(item.id.clone()),
            )?;

            for (lang, text) in &item.translations {
                let lang = language::validate(lang)?;
                staged.add_translation(&item.id, &lang, text, TranslationFlags::primary())?;
            }

            if let Some(expanded) = &item.acronym_extended_name {
                staged.add_translation(&item.id, "en", expanded, TranslationFlags::none())?;
            }
        }

        let report = SeedReport {
            items: staged.len(),
            translations: staged.translation_count(),
            replaced: self.vocabulary.len(),
        };

        self.vocabulary = staged;
        self.seed = metadata;
        self.touch();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_items() -> Vec<SeedItem> {
        serde_json::from_str(
            r#"[
                {
                    "id": "aaaa000001",
                    "term": "Sepsis",
                    "definition": "A life-threatening response to infection.",
                    "category": "conditions",
                    "translations": {"es": "sepsis", "pt": "sepse"}
                },
                {
                    "id": "aaaa000002",
                    "term": "CPR",
                    "category": "procedures",
                    "translations": {"es": "RCP"},
                    "acronymExtendedName": "Cardiopulmonary Resuscitation"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_reseed_loads_items_and_translations() {
        let mut base = Termbase::new();
        let report = base.reseed(&seed_items(), None).unwrap();

        assert_eq!(report.items, 2);
        assert_eq!(report.translations, 4);
        assert_eq!(report.replaced, 0);

        let sepsis = base.vocabulary.get("aaaa000001").unwrap();
        assert!(sepsis.translations.iter().all(|t| t.is_primary));
        assert_eq!(sepsis.primary_translations().get("pt"), Some(&"sepse"));
    }

    #[test]
    fn test_reseed_imports_acronym_expansion_unflagged() {
        let mut base = Termbase::new();
        base.reseed(&seed_items(), None).unwrap();

        let cpr = base.vocabulary.get("aaaa000002").unwrap();
        let expansion = cpr.translation("en", "Cardiopulmonary Resuscitation").unwrap();
        assert!(!expansion.is_primary);
        assert!(!expansion.is_colloquial);
        assert!(!expansion.is_user_proposed);
    }

    #[test]
    fn test_reseed_replaces_existing_vocabulary() {
        let mut base = Termbase::new();
        base.author_item("Old term", "", "misc", &BTreeMap::new()).unwrap();

        let report = base.reseed(&seed_items(), None).unwrap();
        assert_eq!(report.replaced, 1);
        assert_eq!(base.vocabulary.len(), 2);
        assert!(!base.vocabulary.contains_term("Old term"));
    }

    #[test]
    fn test_reseed_failure_leaves_store_untouched() {
        let mut base = Termbase::new();
        base.author_item("Old term", "", "misc", &BTreeMap::new()).unwrap();

        let mut items = seed_items();
        items[1].id = items[0].id.clone();

        let err = base.reseed(&items, None).unwrap_err();
        assert!(matches!(err, TermbaseError::DuplicateIdentifier(_)));

        // The duplicate id aborted the whole load.
        assert_eq!(base.vocabulary.len(), 1);
        assert!(base.vocabulary.contains_term("Old term"));
    }

    #[test]
    fn test_reseed_from_file_records_provenance() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&seed_items()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let mut base = Termbase::new();
        let report = base.reseed_from_file(file.path()).unwrap();
        assert_eq!(report.items, 2);

        let seed = base.seed.as_ref().unwrap();
        assert_eq!(seed.item_count, 2);
        assert_eq!(seed.hash.len(), 64);
    }

    #[test]
    fn test_reseed_from_missing_file() {
        let mut base = Termbase::new();
        let err = base.reseed_from_file("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, TermbaseError::Io { .. }));
    }
}
