//! The moderation engine: suggestion intake, deduplication, and the
//! accept/reject transitions that materialize into the vocabulary store.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};
use crate::language;
use crate::suggestion::{
    NewWordSuggestion, ProposalKind, SuggestionKind, SuggestionStatus, VocabularySuggestion,
};
use crate::termbase::Termbase;
use crate::vocabulary::{TranslationFlags, VocabularyItem};

/// Input for a new-word suggestion submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWordDraft {
    pub term: String,
    pub definition: String,
    pub translation: String,
    pub language: String,
    pub category: String,
}

impl Termbase {
    /// Submit a proposal for an entirely new vocabulary entry.
    ///
    /// The term is stored lowercased; that canonical form is compared
    /// case-insensitively against existing item terms and other pending
    /// new-word suggestions. Persists as `pending`.
    pub fn submit_new_word(&mut self, draft: &NewWordDraft) -> Result<&NewWordSuggestion> {
        let term = draft.term.trim().to_lowercase();
        if term.is_empty() {
            return Err(TermbaseError::InvalidArgument(
                "term must not be empty".to_string(),
            ));
        }
        let translation = draft.translation.trim();
        if translation.is_empty() {
            return Err(TermbaseError::InvalidArgument(
                "translation must not be empty".to_string(),
            ));
        }
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(TermbaseError::InvalidArgument(
                "category must not be empty".to_string(),
            ));
        }
        let lang = language::validate(&draft.language)?;

        if self.vocabulary.contains_term(&term) || self.suggestions.has_pending_term(&term) {
            return Err(TermbaseError::DuplicateTerm(term));
        }

        let suggestion = NewWordSuggestion::new(
            term,
            draft.definition.trim(),
            translation,
            lang,
            category,
        );
        let id = self.suggestions.insert_new_word(suggestion).id.clone();
        self.touch();
        Ok(self.suggestions.new_word(&id).unwrap())
    }

    /// Submit a proposal attached to an existing term.
    ///
    /// The term resolves case-insensitively to its vocabulary item. The
    /// language is truncated to 2 characters before validation, and any
    /// proposal kind other than `colloquial` is treated as a translation
    /// proposal. Persists as `pending`.
    pub fn submit_for_term(
        &mut self,
        term: &str,
        proposal_input: &str,
        text: &str,
        lang_input: &str,
    ) -> Result<&VocabularySuggestion> {
        let item_id = self
            .vocabulary
            .find_by_term(term)
            .map(|item| item.id.clone())
            .ok_or_else(|| TermbaseError::ItemNotFound(term.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TermbaseError::InvalidArgument(
                "suggestion text must not be empty".to_string(),
            ));
        }
        let lang = language::truncate_and_validate(lang_input)?;
        let proposal = ProposalKind::from_input(proposal_input);

        if self.suggestions.has_proposal(&item_id, proposal, text, &lang) {
            return Err(TermbaseError::DuplicateSuggestion(item_id));
        }

        let suggestion = VocabularySuggestion::new(item_id, proposal, text, lang);
        let id = self.suggestions.insert_vocabulary(suggestion).id.clone();
        self.touch();
        Ok(self.suggestions.vocabulary(&id).unwrap())
    }

    /// Approve a new-word suggestion, materializing a vocabulary item with
    /// one primary translation.
    ///
    /// All-or-nothing: the item id is generated and re-checked before the
    /// first write, and the remaining writes cannot fail in between, so the
    /// store never holds an item without its translation or an accepted
    /// suggestion without its item.
    pub fn approve_new_word(&mut self, id: &str) -> Result<&VocabularyItem> {
        let suggestion = self
            .suggestions
            .new_word(id)
            .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?;
        let next = suggestion
            .status
            .transition(SuggestionStatus::Accepted)
            .map_err(|status| TermbaseError::InvalidState {
                id: id.to_string(),
                status,
            })?;

        let term = suggestion.term.clone();
        let definition = suggestion.definition.clone();
        let category = suggestion.category.clone();
        let translation = suggestion.translation.clone();
        let lang = suggestion.language.clone();

        let item_id = self
            .vocabulary
            .create_item(term, definition, category, None)?
            .id
            .clone();
        self.vocabulary
            .insert_translation(&item_id, lang, translation, TranslationFlags::primary())?;

        self.suggestions.new_word_mut(id).unwrap().status = next;
        self.touch();
        Ok(self.vocabulary.get(&item_id).unwrap())
    }

    /// Approve an attached suggestion, materializing one translation on its
    /// target item: colloquial proposals set `is_colloquial`, translation
    /// proposals set `is_user_proposed`.
    ///
    /// Same all-or-nothing rules as [`Termbase::approve_new_word`]; the
    /// target item is verified before anything is written.
    pub fn approve_vocabulary_suggestion(&mut self, id: &str) -> Result<&VocabularyItem> {
        let suggestion = self
            .suggestions
            .vocabulary(id)
            .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?;
        let next = suggestion
            .status
            .transition(SuggestionStatus::Accepted)
            .map_err(|status| TermbaseError::InvalidState {
                id: id.to_string(),
                status,
            })?;

        let item_id = suggestion.item_id.clone();
        let text = suggestion.text.clone();
        let lang = suggestion.language.clone();
        let flags = match suggestion.proposal {
            ProposalKind::Colloquial => TranslationFlags::colloquial(),
            ProposalKind::Translation => TranslationFlags::user_proposed(),
        };

        // The weak item reference may dangle after a reseed.
        self.vocabulary.require(&item_id)?;
        self.vocabulary.add_translation(&item_id, &lang, &text, flags)?;

        self.suggestions.vocabulary_mut(id).unwrap().status = next;
        self.touch();
        Ok(self.vocabulary.get(&item_id).unwrap())
    }

    /// Reject a suggestion. The kind selects which table is searched; an id
    /// absent from that table is `SuggestionNotFound` even if it exists in
    /// the other.
    pub fn reject_suggestion(&mut self, id: &str, kind: SuggestionKind) -> Result<()> {
        match kind {
            SuggestionKind::NewWord => {
                let s = self
                    .suggestions
                    .new_word_mut(id)
                    .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?;
                s.status = s
                    .status
                    .transition(SuggestionStatus::Rejected)
                    .map_err(|status| TermbaseError::InvalidState {
                        id: id.to_string(),
                        status,
                    })?;
            }
            SuggestionKind::Vocabulary => {
                let s = self
                    .suggestions
                    .vocabulary_mut(id)
                    .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?;
                s.status = s
                    .status
                    .transition(SuggestionStatus::Rejected)
                    .map_err(|status| TermbaseError::InvalidState {
                        id: id.to_string(),
                        status,
                    })?;
            }
        }
        self.touch();
        Ok(())
    }

    /// All pending new-word suggestions.
    pub fn pending_new_words(&self) -> Vec<&NewWordSuggestion> {
        self.suggestions
            .new_words()
            .filter(|s| s.status == SuggestionStatus::Pending)
            .collect()
    }

    /// All pending attached suggestions.
    pub fn pending_vocabulary_suggestions(&self) -> Vec<&VocabularySuggestion> {
        self.suggestions
            .vocabulary_suggestions()
            .filter(|s| s.status == SuggestionStatus::Pending)
            .collect()
    }

    /// All attached suggestions targeting one vocabulary item.
    pub fn suggestions_for_item(&self, item_id: &str) -> Vec<&VocabularySuggestion> {
        self.suggestions.for_item(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn draft(term: &str) -> NewWordDraft {
        NewWordDraft {
            term: term.to_string(),
            definition: "Sorting patients by urgency.".to_string(),
            translation: "triaje".to_string(),
            language: "es".to_string(),
            category: "procedures".to_string(),
        }
    }

    fn base_with_item(term: &str) -> Termbase {
        let mut base = Termbase::new();
        let translations: BTreeMap<String, String> =
            [("es".to_string(), "sepsis".to_string())].into_iter().collect();
        base.author_item(term, "A life-threatening response to infection.", "conditions", &translations)
            .unwrap();
        base
    }

    #[test]
    fn test_submit_new_word_stores_lowercase_pending() {
        let mut base = Termbase::new();
        let sug = base.submit_new_word(&draft("Triage")).unwrap();

        assert_eq!(sug.term, "triage");
        assert_eq!(sug.status, SuggestionStatus::Pending);
        assert_eq!(sug.language, "es");
    }

    #[test]
    fn test_submit_new_word_duplicate_of_item_term() {
        let mut base = base_with_item("Sepsis");
        let err = base.submit_new_word(&draft("sepsis")).unwrap_err();
        assert!(matches!(err, TermbaseError::DuplicateTerm(t) if t == "sepsis"));
    }

    #[test]
    fn test_submit_new_word_duplicate_of_pending_suggestion() {
        let mut base = Termbase::new();
        base.submit_new_word(&draft("triage")).unwrap();

        let err = base.submit_new_word(&draft("TRIAGE")).unwrap_err();
        assert!(matches!(err, TermbaseError::DuplicateTerm(_)));
    }

    #[test]
    fn test_submit_new_word_after_rejection_is_allowed() {
        let mut base = Termbase::new();
        let id = base.submit_new_word(&draft("triage")).unwrap().id.clone();
        base.reject_suggestion(&id, SuggestionKind::NewWord).unwrap();

        assert!(base.submit_new_word(&draft("triage")).is_ok());
    }

    #[test]
    fn test_submit_new_word_validates_language() {
        let mut base = Termbase::new();
        let mut bad = draft("triage");
        bad.language = "spanish".to_string();
        assert!(matches!(
            base.submit_new_word(&bad),
            Err(TermbaseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_submit_for_term_resolves_case_insensitively() {
        let mut base = base_with_item("Sepsis");
        let sug = base
            .submit_for_term("sepsis", "colloquial", "blood poisoning", "en")
            .unwrap();

        assert_eq!(sug.proposal, ProposalKind::Colloquial);
        assert_eq!(sug.status, SuggestionStatus::Pending);
    }

    #[test]
    fn test_submit_for_term_unknown_term() {
        let mut base = Termbase::new();
        let err = base
            .submit_for_term("cholera", "translation", "cólera", "es")
            .unwrap_err();
        assert!(matches!(err, TermbaseError::ItemNotFound(t) if t == "cholera"));
    }

    #[test]
    fn test_submit_for_term_truncates_language() {
        let mut base = base_with_item("Sepsis");
        let sug = base
            .submit_for_term("Sepsis", "translation", "sepse", "portuguese")
            .unwrap();
        assert_eq!(sug.language, "po");
    }

    #[test]
    fn test_submit_for_term_unknown_kind_defaults_to_translation() {
        let mut base = base_with_item("Sepsis");
        let sug = base
            .submit_for_term("Sepsis", "misc", "septicemia", "es")
            .unwrap();
        assert_eq!(sug.proposal, ProposalKind::Translation);
    }

    #[test]
    fn test_submit_for_term_duplicate() {
        let mut base = base_with_item("Sepsis");
        base.submit_for_term("Sepsis", "translation", "sepse", "pt").unwrap();

        let err = base
            .submit_for_term("Sepsis", "translation", "sepse", "pt")
            .unwrap_err();
        assert!(matches!(err, TermbaseError::DuplicateSuggestion(_)));

        // Same text under the other proposal kind is a distinct suggestion.
        assert!(base.submit_for_term("Sepsis", "colloquial", "sepse", "pt").is_ok());
    }

    #[test]
    fn test_approve_new_word_materializes_item_and_primary_translation() {
        let mut base = Termbase::new();
        let id = base.submit_new_word(&draft("triage")).unwrap().id.clone();

        let item = base.approve_new_word(&id).unwrap();
        let item_id = item.id.clone();
        assert_eq!(item.term, "triage");
        assert_eq!(item.category, "procedures");
        assert_eq!(item.translations.len(), 1);
        assert!(item.translations[0].is_primary);
        assert_eq!(item.translations[0].text, "triaje");

        assert_eq!(
            base.suggestions.new_word(&id).unwrap().status,
            SuggestionStatus::Accepted
        );
        assert!(base.vocabulary.get(&item_id).is_some());
    }

    #[test]
    fn test_approve_new_word_not_found() {
        let mut base = Termbase::new();
        assert!(matches!(
            base.approve_new_word("sug_missing"),
            Err(TermbaseError::SuggestionNotFound(_))
        ));
    }

    #[test]
    fn test_approve_new_word_twice_does_not_double_materialize() {
        let mut base = Termbase::new();
        let id = base.submit_new_word(&draft("triage")).unwrap().id.clone();
        base.approve_new_word(&id).unwrap();
        assert_eq!(base.vocabulary.len(), 1);

        let err = base.approve_new_word(&id).unwrap_err();
        assert!(matches!(
            err,
            TermbaseError::InvalidState { status: SuggestionStatus::Accepted, .. }
        ));
        assert_eq!(base.vocabulary.len(), 1);
    }

    #[test]
    fn test_approve_rejected_new_word_is_invalid_state() {
        let mut base = Termbase::new();
        let id = base.submit_new_word(&draft("triage")).unwrap().id.clone();
        base.reject_suggestion(&id, SuggestionKind::NewWord).unwrap();

        let err = base.approve_new_word(&id).unwrap_err();
        assert!(matches!(
            err,
            TermbaseError::InvalidState { status: SuggestionStatus::Rejected, .. }
        ));
        assert!(base.vocabulary.is_empty());
    }

    #[test]
    fn test_approve_colloquial_sets_colloquial_flag() {
        let mut base = base_with_item("Sepsis");
        let id = base
            .submit_for_term("Sepsis", "colloquial", "blood poisoning", "en")
            .unwrap()
            .id
            .clone();

        let item = base.approve_vocabulary_suggestion(&id).unwrap();
        let row = item.translation("en", "blood poisoning").unwrap();
        assert!(row.is_colloquial);
        assert!(!row.is_user_proposed);
        assert!(!row.is_primary);
    }

    #[test]
    fn test_approve_translation_sets_user_proposed_flag() {
        let mut base = base_with_item("Sepsis");
        let id = base
            .submit_for_term("Sepsis", "translation", "sepse", "pt")
            .unwrap()
            .id
            .clone();

        let item = base.approve_vocabulary_suggestion(&id).unwrap();
        let row = item.translation("pt", "sepse").unwrap();
        assert!(row.is_user_proposed);
        assert!(!row.is_colloquial);
    }

    #[test]
    fn test_approve_vocabulary_suggestion_with_dangling_item() {
        let mut base = base_with_item("Sepsis");
        let id = base
            .submit_for_term("Sepsis", "translation", "sepse", "pt")
            .unwrap()
            .id
            .clone();

        base.vocabulary.clear();

        let err = base.approve_vocabulary_suggestion(&id).unwrap_err();
        assert!(matches!(err, TermbaseError::ItemNotFound(_)));
        // The failed approval must leave the suggestion pending.
        assert_eq!(
            base.suggestions.vocabulary(&id).unwrap().status,
            SuggestionStatus::Pending
        );
    }

    #[test]
    fn test_reject_searches_only_the_selected_table() {
        let mut base = base_with_item("Sepsis");
        let id = base
            .submit_for_term("Sepsis", "translation", "sepse", "pt")
            .unwrap()
            .id
            .clone();

        // Wrong kind: the id only exists in the vocabulary table.
        let err = base.reject_suggestion(&id, SuggestionKind::NewWord).unwrap_err();
        assert!(matches!(err, TermbaseError::SuggestionNotFound(_)));

        base.reject_suggestion(&id, SuggestionKind::Vocabulary).unwrap();
        assert_eq!(
            base.suggestions.vocabulary(&id).unwrap().status,
            SuggestionStatus::Rejected
        );
    }

    #[test]
    fn test_reject_terminal_suggestion_is_invalid_state() {
        let mut base = Termbase::new();
        let id = base.submit_new_word(&draft("triage")).unwrap().id.clone();
        base.reject_suggestion(&id, SuggestionKind::NewWord).unwrap();

        let err = base.reject_suggestion(&id, SuggestionKind::NewWord).unwrap_err();
        assert!(matches!(err, TermbaseError::InvalidState { .. }));
    }

    #[test]
    fn test_pending_queries() {
        let mut base = base_with_item("Sepsis");
        let word_id = base.submit_new_word(&draft("triage")).unwrap().id.clone();
        base.submit_for_term("Sepsis", "translation", "sepse", "pt").unwrap();

        assert_eq!(base.pending_new_words().len(), 1);
        assert_eq!(base.pending_vocabulary_suggestions().len(), 1);

        base.approve_new_word(&word_id).unwrap();
        assert!(base.pending_new_words().is_empty());
    }
}
