//! The vocabulary store - canonical authority for items and translations.

use indexmap::{IndexMap, IndexSet};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};
use crate::id;

use super::item::{TranslationFlags, Translation, VocabularyItem};

/// Bounded retries when a freshly generated identifier collides.
const ID_RETRIES: usize = 8;

/// Owns all vocabulary items, keyed by identifier in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyStore {
    items: IndexMap<String, VocabularyItem>,
}

impl VocabularyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary item.
    ///
    /// When `id` is `None`, a fresh token is generated and re-checked against
    /// the store before commit. A supplied id that already exists fails with
    /// `DuplicateIdentifier`.
    pub fn create_item(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
        id: Option<String>,
    ) -> Result<&VocabularyItem> {
        let id = match id {
            Some(id) => {
                if self.items.contains_key(&id) {
                    return Err(TermbaseError::DuplicateIdentifier(id));
                }
                id
            }
            None => self.generate_id()?,
        };

        let item = VocabularyItem::new(id.clone(), term, definition, category);
        self.items.insert(id.clone(), item);
        Ok(self.items.get(&id).unwrap())
    }

    /// Insert a translation row, failing with `DuplicateTranslation` when the
    /// (item, language, text) tuple is already stored.
    pub fn insert_translation(
        &mut self,
        item_id: &str,
        language: impl Into<String>,
        text: impl Into<String>,
        flags: TranslationFlags,
    ) -> Result<&Translation> {
        self.require_mut(item_id)?.insert_translation(language, text, flags)
    }

    /// Get-or-create a translation row.
    ///
    /// Re-adding an identical (item, language, text) tuple returns the
    /// existing row (`created = false`) without touching its flags, even when
    /// the supplied flags differ.
    pub fn add_translation(
        &mut self,
        item_id: &str,
        language: &str,
        text: &str,
        flags: TranslationFlags,
    ) -> Result<(&Translation, bool)> {
        let item = self.require_mut(item_id)?;

        if let Some(pos) = item
            .translations
            .iter()
            .position(|t| t.language == language && t.text == text)
        {
            return Ok((&item.translations[pos], false));
        }

        item.translations.push(Translation::new(language, text, flags));
        Ok((item.translations.last().unwrap(), true))
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&VocabularyItem> {
        self.items.get(id)
    }

    /// Get an item by id, failing with `ItemNotFound`.
    pub fn require(&self, id: &str) -> Result<&VocabularyItem> {
        self.get(id)
            .ok_or_else(|| TermbaseError::ItemNotFound(id.to_string()))
    }

    /// Resolve a term to its item, comparing case-insensitively.
    pub fn find_by_term(&self, term: &str) -> Option<&VocabularyItem> {
        let needle = term.trim().to_lowercase();
        self.items
            .values()
            .find(|item| item.term.to_lowercase() == needle)
    }

    /// Whether any item's term matches case-insensitively.
    pub fn contains_term(&self, term: &str) -> bool {
        self.find_by_term(term).is_some()
    }

    /// All items in a category.
    pub fn list_by_category(&self, category: &str) -> Vec<&VocabularyItem> {
        self.items
            .values()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .values()
            .map(|item| item.category.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Case-insensitive substring search over terms and translation texts,
    /// optionally narrowed to items carrying the given language.
    ///
    /// An empty query matches every item.
    pub fn search(&self, query: &str, language: Option<&str>) -> Result<Vec<&VocabularyItem>> {
        let pattern = RegexBuilder::new(&regex::escape(query.trim()))
            .case_insensitive(true)
            .build()?;

        Ok(self
            .items
            .values()
            .filter(|item| {
                let text_match = pattern.is_match(&item.term)
                    || item.translations.iter().any(|t| pattern.is_match(&t.text));
                let language_match = language.map_or(true, |lang| item.has_language(lang));
                text_match && language_match
            })
            .collect())
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyItem> {
        self.items.values()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total translation rows across all items.
    pub fn translation_count(&self) -> usize {
        self.items.values().map(|item| item.translations.len()).sum()
    }

    /// Remove every item (bulk reseeding only).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut VocabularyItem> {
        self.items
            .get_mut(id)
            .ok_or_else(|| TermbaseError::ItemNotFound(id.to_string()))
    }

    fn generate_id(&self) -> Result<String> {
        for _ in 0..ID_RETRIES {
            let id = id::token();
            if !self.items.contains_key(&id) {
                return Ok(id);
            }
        }
        Err(TermbaseError::Persistence(
            "exhausted identifier generation retries".to_string(),
        ))
    }
}
