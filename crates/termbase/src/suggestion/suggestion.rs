//! The two suggestion record kinds.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

use super::status::{ProposalKind, SuggestionKind, SuggestionStatus};

/// A proposal for an entirely new vocabulary entry.
///
/// The term is stored in canonical lowercase; that stored form is what the
/// duplicate check compares against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWordSuggestion {
    /// Unique identifier for this suggestion.
    pub id: String,

    /// Proposed term, canonical lowercase.
    pub term: String,

    /// Proposed definition.
    pub definition: String,

    /// A single proposed translation.
    pub translation: String,

    /// 2-letter language code of the translation.
    pub language: String,

    /// Proposed grouping label.
    pub category: String,

    /// Moderation status.
    pub status: SuggestionStatus,

    /// User identifiers that have liked this suggestion.
    pub likes: BTreeSet<String>,

    /// When the suggestion was submitted.
    pub suggested_at: DateTime<Utc>,
}

impl NewWordSuggestion {
    /// Create a pending suggestion.
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        translation: impl Into<String>,
        language: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id::suggestion_id(),
            term: term.into(),
            definition: definition.into(),
            translation: translation.into(),
            language: language.into(),
            category: category.into(),
            status: SuggestionStatus::Pending,
            likes: BTreeSet::new(),
            suggested_at: Utc::now(),
        }
    }

    /// Number of users that have liked this suggestion.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// A proposal attached to an existing vocabulary item.
///
/// The item reference is weak: reseeding the vocabulary can leave it
/// dangling, which approval reports as the item being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularySuggestion {
    /// Unique identifier for this suggestion.
    pub id: String,

    /// Identifier of the vocabulary item this proposal targets.
    pub item_id: String,

    /// What is being proposed.
    pub proposal: ProposalKind,

    /// The proposed text.
    pub text: String,

    /// 2-letter language code.
    pub language: String,

    /// Moderation status.
    pub status: SuggestionStatus,

    /// User identifiers that have liked this suggestion.
    pub likes: BTreeSet<String>,

    /// When the suggestion was submitted.
    pub suggested_at: DateTime<Utc>,
}

impl VocabularySuggestion {
    /// Create a pending suggestion.
    pub fn new(
        item_id: impl Into<String>,
        proposal: ProposalKind,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id::suggestion_id(),
            item_id: item_id.into(),
            proposal,
            text: text.into(),
            language: language.into(),
            status: SuggestionStatus::Pending,
            likes: BTreeSet::new(),
            suggested_at: Utc::now(),
        }
    }

    /// Number of users that have liked this suggestion.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// A borrowed view over either suggestion kind.
///
/// Both kinds share the moderation state machine and the liker set; this
/// view gives kind-agnostic access where the caller pattern-matches instead
/// of branching on strings.
#[derive(Debug, Clone, Copy)]
pub enum SuggestionRef<'a> {
    NewWord(&'a NewWordSuggestion),
    Vocabulary(&'a VocabularySuggestion),
}

impl<'a> SuggestionRef<'a> {
    /// The suggestion identifier.
    pub fn id(&self) -> &'a str {
        match self {
            SuggestionRef::NewWord(s) => &s.id,
            SuggestionRef::Vocabulary(s) => &s.id,
        }
    }

    /// Which table this suggestion lives in.
    pub fn kind(&self) -> SuggestionKind {
        match self {
            SuggestionRef::NewWord(_) => SuggestionKind::NewWord,
            SuggestionRef::Vocabulary(_) => SuggestionKind::Vocabulary,
        }
    }

    /// Current moderation status.
    pub fn status(&self) -> SuggestionStatus {
        match self {
            SuggestionRef::NewWord(s) => s.status,
            SuggestionRef::Vocabulary(s) => s.status,
        }
    }

    /// Number of users that have liked this suggestion.
    pub fn like_count(&self) -> usize {
        match self {
            SuggestionRef::NewWord(s) => s.like_count(),
            SuggestionRef::Vocabulary(s) => s.like_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_suggestion_starts_pending() {
        let sug = NewWordSuggestion::new("triage", "Sorting patients by urgency.", "triaje", "es", "procedures");

        assert!(sug.id.starts_with("sug_"));
        assert_eq!(sug.status, SuggestionStatus::Pending);
        assert_eq!(sug.like_count(), 0);
    }

    #[test]
    fn test_vocabulary_suggestion_starts_pending() {
        let sug = VocabularySuggestion::new("aaaa000001", ProposalKind::Colloquial, "tripas", "es");

        assert!(sug.id.starts_with("sug_"));
        assert_eq!(sug.proposal, ProposalKind::Colloquial);
        assert_eq!(sug.status, SuggestionStatus::Pending);
    }

    #[test]
    fn test_suggestion_ref_accessors() {
        let mut word = NewWordSuggestion::new("triage", "", "triaje", "es", "procedures");
        word.likes.insert("ana".to_string());
        let attached = VocabularySuggestion::new("aaaa000001", ProposalKind::Translation, "sepse", "pt");

        let word_ref = SuggestionRef::NewWord(&word);
        assert_eq!(word_ref.kind(), SuggestionKind::NewWord);
        assert_eq!(word_ref.id(), word.id);
        assert_eq!(word_ref.like_count(), 1);

        let attached_ref = SuggestionRef::Vocabulary(&attached);
        assert_eq!(attached_ref.kind(), SuggestionKind::Vocabulary);
        assert_eq!(attached_ref.status(), SuggestionStatus::Pending);
    }
}
