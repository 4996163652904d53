//! Vocabulary items and their translations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};

/// Classification flags for a translation row.
///
/// The flags are independent booleans in the data model, but each creation
/// path sets at most one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationFlags {
    pub is_primary: bool,
    pub is_colloquial: bool,
    pub is_user_proposed: bool,
}

impl TranslationFlags {
    /// No flags set (e.g. an acronym expansion imported alongside seed data).
    pub fn none() -> Self {
        Self::default()
    }

    /// The authoritative translation for a language.
    pub fn primary() -> Self {
        Self {
            is_primary: true,
            ..Self::default()
        }
    }

    /// An informal or slang variant.
    pub fn colloquial() -> Self {
        Self {
            is_colloquial: true,
            ..Self::default()
        }
    }

    /// A translation that originated from an accepted user suggestion.
    pub fn user_proposed() -> Self {
        Self {
            is_user_proposed: true,
            ..Self::default()
        }
    }
}

/// A language-tagged rendering of a vocabulary item's term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// 2-letter language code.
    pub language: String,

    /// The translated text.
    pub text: String,

    pub is_primary: bool,
    pub is_colloquial: bool,
    pub is_user_proposed: bool,
}

impl Translation {
    /// Create a new translation row.
    pub fn new(language: impl Into<String>, text: impl Into<String>, flags: TranslationFlags) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
            is_primary: flags.is_primary,
            is_colloquial: flags.is_colloquial,
            is_user_proposed: flags.is_user_proposed,
        }
    }
}

/// A canonical term/definition/category record with its translations.
///
/// The item exclusively owns its translation rows; removing the item removes
/// them with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Opaque identifier, unique across the store and immutable.
    pub id: String,

    /// Display text of the term.
    pub term: String,

    /// Long-form definition.
    pub definition: String,

    /// Free-text grouping label.
    pub category: String,

    /// Translation rows, unique per (language, text).
    pub translations: Vec<Translation>,

    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl VocabularyItem {
    /// Create a new item with no translations.
    pub fn new(
        id: impl Into<String>,
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
            category: category.into(),
            translations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Look up a translation row by (language, text).
    pub fn translation(&self, language: &str, text: &str) -> Option<&Translation> {
        self.translations
            .iter()
            .find(|t| t.language == language && t.text == text)
    }

    /// Whether the item carries any translation in the given language.
    pub fn has_language(&self, language: &str) -> bool {
        self.translations.iter().any(|t| t.language == language)
    }

    /// Insert a translation row, enforcing the (language, text) uniqueness
    /// invariant.
    ///
    /// Returns the stored row. An existing identical tuple is an error even
    /// when the flags differ; the first-created row wins.
    pub fn insert_translation(
        &mut self,
        language: impl Into<String>,
        text: impl Into<String>,
        flags: TranslationFlags,
    ) -> Result<&Translation> {
        let language = language.into();
        let text = text.into();

        if self.translation(&language, &text).is_some() {
            return Err(TermbaseError::DuplicateTranslation {
                item_id: self.id.clone(),
                language,
                text,
            });
        }

        self.translations.push(Translation::new(language, text, flags));
        Ok(self.translations.last().unwrap())
    }

    /// The authoritative translation per language (language → text).
    pub fn primary_translations(&self) -> BTreeMap<&str, &str> {
        self.translations
            .iter()
            .filter(|t| t.is_primary)
            .map(|t| (t.language.as_str(), t.text.as_str()))
            .collect()
    }

    /// Colloquial variants grouped by language.
    pub fn colloquial_terms(&self) -> BTreeMap<&str, Vec<&str>> {
        Self::group_by_language(self.translations.iter().filter(|t| t.is_colloquial))
    }

    /// User-proposed translations grouped by language.
    pub fn user_proposed_translations(&self) -> BTreeMap<&str, Vec<&str>> {
        Self::group_by_language(self.translations.iter().filter(|t| t.is_user_proposed))
    }

    fn group_by_language<'a>(
        rows: impl Iterator<Item = &'a Translation>,
    ) -> BTreeMap<&'a str, Vec<&'a str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for t in rows {
            grouped.entry(t.language.as_str()).or_default().push(t.text.as_str());
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_constructors_are_disjoint() {
        assert_eq!(TranslationFlags::none(), TranslationFlags::default());
        assert!(TranslationFlags::primary().is_primary);
        assert!(!TranslationFlags::primary().is_colloquial);
        assert!(TranslationFlags::colloquial().is_colloquial);
        assert!(!TranslationFlags::colloquial().is_user_proposed);
        assert!(TranslationFlags::user_proposed().is_user_proposed);
        assert!(!TranslationFlags::user_proposed().is_primary);
    }

    #[test]
    fn test_insert_translation_rejects_duplicate_tuple() {
        let mut item = VocabularyItem::new("a1b2c3d4e5", "sepsis", "A serious infection.", "conditions");

        item.insert_translation("es", "sepsis", TranslationFlags::primary())
            .unwrap();

        // Same tuple with different flags is still a duplicate.
        let err = item
            .insert_translation("es", "sepsis", TranslationFlags::colloquial())
            .unwrap_err();
        assert!(matches!(err, TermbaseError::DuplicateTranslation { .. }));

        // The first-created row is untouched.
        assert_eq!(item.translations.len(), 1);
        assert!(item.translations[0].is_primary);
    }

    #[test]
    fn test_same_language_many_distinct_rows() {
        let mut item = VocabularyItem::new("a1b2c3d4e5", "kidney", "Organ that filters blood.", "anatomy");

        item.insert_translation("es", "riñón", TranslationFlags::primary())
            .unwrap();
        item.insert_translation("es", "riñones", TranslationFlags::colloquial())
            .unwrap();
        item.insert_translation("es", "el filtro", TranslationFlags::user_proposed())
            .unwrap();

        assert_eq!(item.translations.len(), 3);
        assert_eq!(item.primary_translations().get("es"), Some(&"riñón"));
        assert_eq!(item.colloquial_terms()["es"], vec!["riñones"]);
        assert_eq!(item.user_proposed_translations()["es"], vec!["el filtro"]);
    }

    #[test]
    fn test_has_language() {
        let mut item = VocabularyItem::new("a1b2c3d4e5", "fever", "Elevated body temperature.", "symptoms");
        item.insert_translation("pt", "febre", TranslationFlags::primary())
            .unwrap();

        assert!(item.has_language("pt"));
        assert!(!item.has_language("es"));
    }
}
