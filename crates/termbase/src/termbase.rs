//! The termbase document - the persisted aggregate of all stores.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};
use crate::language;
use crate::profile::ProfileStore;
use crate::seed::SeedMetadata;
use crate::suggestion::{SuggestionCounts, SuggestionStore};
use crate::vocabulary::{TranslationFlags, VocabularyItem, VocabularyStore};

/// Current version of the termbase document format.
pub const TERMBASE_VERSION: &str = "1.0.0";

/// Category applied when authoring omits one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Summary statistics for a termbase document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermbaseSummary {
    /// Number of vocabulary items.
    pub items: usize,
    /// Total translation rows across all items.
    pub translations: usize,
    /// Number of distinct category labels.
    pub categories: usize,
    /// Suggestions by moderation status, both kinds combined.
    pub suggestions: SuggestionCounts,
    /// Registered user profiles.
    pub profiles: usize,
}

/// The termbase document: vocabulary, suggestions, and profiles together
/// with format and provenance metadata. Serializes to a single JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Termbase {
    /// Version of the document format.
    pub format_version: String,

    /// When the document was created.
    pub created_at: DateTime<Utc>,

    /// When the document was last mutated.
    pub updated_at: DateTime<Utc>,

    /// Provenance of the last bulk seed import, if any.
    pub seed: Option<SeedMetadata>,

    /// Canonical terms and their translations.
    pub vocabulary: VocabularyStore,

    /// Both suggestion tables.
    pub suggestions: SuggestionStore,

    /// User profiles and bookmarks.
    pub profiles: ProfileStore,
}

impl Termbase {
    /// Create an empty document.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            format_version: TERMBASE_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            seed: None,
            vocabulary: VocabularyStore::new(),
            suggestions: SuggestionStore::new(),
            profiles: ProfileStore::new(),
        }
    }

    /// Author a vocabulary item directly, with one primary translation per
    /// map entry.
    ///
    /// All-or-nothing: every language code is validated before the item is
    /// created, so a bad entry leaves the store untouched.
    pub fn author_item(
        &mut self,
        term: &str,
        definition: &str,
        category: &str,
        translations: &BTreeMap<String, String>,
    ) -> Result<&VocabularyItem> {
        let term = term.trim();
        if term.is_empty() {
            return Err(TermbaseError::InvalidArgument(
                "term must not be empty".to_string(),
            ));
        }

        let mut validated: Vec<(String, &str)> = Vec::with_capacity(translations.len());
        for (lang, text) in translations {
            validated.push((language::validate(lang)?, text.as_str()));
        }

        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            category.trim()
        };

        let item_id = self
            .vocabulary
            .create_item(term, definition, category, None)?
            .id
            .clone();

        for (lang, text) in validated {
            self.vocabulary
                .add_translation(&item_id, &lang, text, TranslationFlags::primary())?;
        }

        self.touch();
        Ok(self.vocabulary.get(&item_id).unwrap())
    }

    /// Compute summary statistics.
    pub fn summary(&self) -> TermbaseSummary {
        TermbaseSummary {
            items: self.vocabulary.len(),
            translations: self.vocabulary.translation_count(),
            categories: self.vocabulary.categories().len(),
            suggestions: self.suggestions.counts(),
            profiles: self.profiles.len(),
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Termbase {
    fn default() -> Self {
        Self::new()
    }
}
