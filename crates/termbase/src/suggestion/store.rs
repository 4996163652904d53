//! The suggestion store - both proposal tables and their status bookkeeping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::status::{ProposalKind, SuggestionStatus};
use super::suggestion::{NewWordSuggestion, SuggestionRef, VocabularySuggestion};

/// Counts of suggestions by moderation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCounts {
    /// Not yet reviewed.
    pub pending: usize,
    /// Approved and materialized.
    pub accepted: usize,
    /// Not approved.
    pub rejected: usize,
}

impl SuggestionCounts {
    /// Total number of suggestions.
    pub fn total(&self) -> usize {
        self.pending + self.accepted + self.rejected
    }

    /// Number of decided suggestions (not pending).
    pub fn decided(&self) -> usize {
        self.accepted + self.rejected
    }

    fn record(&mut self, status: SuggestionStatus) {
        match status {
            SuggestionStatus::Pending => self.pending += 1,
            SuggestionStatus::Accepted => self.accepted += 1,
            SuggestionStatus::Rejected => self.rejected += 1,
        }
    }
}

/// Owns both suggestion tables, keyed by identifier in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionStore {
    new_words: IndexMap<String, NewWordSuggestion>,
    vocabulary: IndexMap<String, VocabularySuggestion>,
}

impl SuggestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new-word suggestion.
    pub fn insert_new_word(&mut self, suggestion: NewWordSuggestion) -> &NewWordSuggestion {
        let id = suggestion.id.clone();
        self.new_words.insert(id.clone(), suggestion);
        self.new_words.get(&id).unwrap()
    }

    /// Insert an attached suggestion.
    pub fn insert_vocabulary(&mut self, suggestion: VocabularySuggestion) -> &VocabularySuggestion {
        let id = suggestion.id.clone();
        self.vocabulary.insert(id.clone(), suggestion);
        self.vocabulary.get(&id).unwrap()
    }

    /// Get a new-word suggestion by id.
    pub fn new_word(&self, id: &str) -> Option<&NewWordSuggestion> {
        self.new_words.get(id)
    }

    /// Get an attached suggestion by id.
    pub fn vocabulary(&self, id: &str) -> Option<&VocabularySuggestion> {
        self.vocabulary.get(id)
    }

    pub(crate) fn new_word_mut(&mut self, id: &str) -> Option<&mut NewWordSuggestion> {
        self.new_words.get_mut(id)
    }

    pub(crate) fn vocabulary_mut(&mut self, id: &str) -> Option<&mut VocabularySuggestion> {
        self.vocabulary.get_mut(id)
    }

    /// Whether a pending new-word suggestion matches the term
    /// (case-insensitive; stored terms are already lowercase).
    pub fn has_pending_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.new_words
            .values()
            .any(|s| s.status == SuggestionStatus::Pending && s.term == needle)
    }

    /// Whether an identical attached proposal is already on file for the
    /// item, regardless of its status.
    pub fn has_proposal(
        &self,
        item_id: &str,
        proposal: ProposalKind,
        text: &str,
        language: &str,
    ) -> bool {
        self.vocabulary.values().any(|s| {
            s.item_id == item_id
                && s.proposal == proposal
                && s.text == text
                && s.language == language
        })
    }

    /// All attached suggestions targeting one item.
    pub fn for_item(&self, item_id: &str) -> Vec<&VocabularySuggestion> {
        self.vocabulary
            .values()
            .filter(|s| s.item_id == item_id)
            .collect()
    }

    /// Iterate new-word suggestions in insertion order.
    pub fn new_words(&self) -> impl Iterator<Item = &NewWordSuggestion> {
        self.new_words.values()
    }

    /// Iterate attached suggestions in insertion order.
    pub fn vocabulary_suggestions(&self) -> impl Iterator<Item = &VocabularySuggestion> {
        self.vocabulary.values()
    }

    /// Kind-agnostic view of every suggestion, new-word entries first.
    pub fn all(&self) -> Vec<SuggestionRef<'_>> {
        self.new_words
            .values()
            .map(SuggestionRef::NewWord)
            .chain(self.vocabulary.values().map(SuggestionRef::Vocabulary))
            .collect()
    }

    /// Status counts across both tables.
    pub fn counts(&self) -> SuggestionCounts {
        let mut counts = SuggestionCounts::default();
        for s in self.new_words.values() {
            counts.record(s.status);
        }
        for s in self.vocabulary.values() {
            counts.record(s.status);
        }
        counts
    }

    /// Total suggestions across both tables.
    pub fn len(&self) -> usize {
        self.new_words.len() + self.vocabulary.len()
    }

    /// Whether both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.new_words.is_empty() && self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_fixtures() -> (SuggestionStore, String, String) {
        let mut store = SuggestionStore::new();
        let word_id = store
            .insert_new_word(NewWordSuggestion::new(
                "triage",
                "Sorting patients by urgency.",
                "triaje",
                "es",
                "procedures",
            ))
            .id
            .clone();
        let attached_id = store
            .insert_vocabulary(VocabularySuggestion::new(
                "aaaa000001",
                ProposalKind::Colloquial,
                "tripas",
                "es",
            ))
            .id
            .clone();
        (store, word_id, attached_id)
    }

    #[test]
    fn test_lookup_by_kind() {
        let (store, word_id, attached_id) = store_with_fixtures();

        assert!(store.new_word(&word_id).is_some());
        assert!(store.vocabulary(&attached_id).is_some());

        // Ids do not cross tables.
        assert!(store.new_word(&attached_id).is_none());
        assert!(store.vocabulary(&word_id).is_none());
    }

    #[test]
    fn test_has_pending_term() {
        let (mut store, word_id, _) = store_with_fixtures();

        assert!(store.has_pending_term("triage"));
        assert!(store.has_pending_term("TRIAGE"));
        assert!(!store.has_pending_term("sepsis"));

        // Terminal suggestions no longer block resubmission.
        store.new_word_mut(&word_id).unwrap().status = SuggestionStatus::Rejected;
        assert!(!store.has_pending_term("triage"));
    }

    #[test]
    fn test_has_proposal_ignores_status() {
        let (mut store, _, attached_id) = store_with_fixtures();

        store.vocabulary_mut(&attached_id).unwrap().status = SuggestionStatus::Rejected;

        assert!(store.has_proposal("aaaa000001", ProposalKind::Colloquial, "tripas", "es"));
        assert!(!store.has_proposal("aaaa000001", ProposalKind::Translation, "tripas", "es"));
        assert!(!store.has_proposal("aaaa000002", ProposalKind::Colloquial, "tripas", "es"));
    }

    #[test]
    fn test_for_item() {
        let (mut store, _, _) = store_with_fixtures();
        store.insert_vocabulary(VocabularySuggestion::new(
            "aaaa000002",
            ProposalKind::Translation,
            "rim",
            "pt",
        ));

        assert_eq!(store.for_item("aaaa000001").len(), 1);
        assert_eq!(store.for_item("aaaa000002").len(), 1);
        assert!(store.for_item("zzzz999999").is_empty());
    }

    #[test]
    fn test_counts() {
        let (mut store, word_id, _) = store_with_fixtures();
        store.new_word_mut(&word_id).unwrap().status = SuggestionStatus::Accepted;

        let counts = store.counts();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.accepted, 1);
        assert_eq!(counts.rejected, 0);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.decided(), 1);
    }

    #[test]
    fn test_all_is_kind_agnostic() {
        let (store, _, _) = store_with_fixtures();
        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind().label(), "new word");
        assert_eq!(all[1].kind().label(), "vocabulary");
    }
}
