//! The engagement tracker: suggestion likes and saved-vocabulary bookmarks.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};
use crate::suggestion::SuggestionKind;
use crate::termbase::Termbase;
use crate::vocabulary::VocabularyItem;

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeOutcome {
    /// Whether the user likes the suggestion after the toggle.
    pub liked: bool,
    /// Size of the liker set after the toggle.
    pub like_count: usize,
}

impl Termbase {
    /// Toggle a user's like on a suggestion.
    ///
    /// Idempotent under double application: toggling twice restores the
    /// original state. Works on suggestions in any status.
    pub fn toggle_like(
        &mut self,
        id: &str,
        kind: SuggestionKind,
        user: &str,
    ) -> Result<LikeOutcome> {
        let likes = match kind {
            SuggestionKind::NewWord => {
                &mut self
                    .suggestions
                    .new_word_mut(id)
                    .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?
                    .likes
            }
            SuggestionKind::Vocabulary => {
                &mut self
                    .suggestions
                    .vocabulary_mut(id)
                    .ok_or_else(|| TermbaseError::SuggestionNotFound(id.to_string()))?
                    .likes
            }
        };

        let liked = if likes.remove(user) {
            false
        } else {
            likes.insert(user.to_string());
            true
        };
        let like_count = likes.len();

        self.touch();
        Ok(LikeOutcome { liked, like_count })
    }

    /// Union the given item ids into the user's saved set.
    ///
    /// Returns how many ids were newly added; ids already saved are ignored.
    pub fn save_vocabulary(&mut self, user: &str, item_ids: &[String]) -> Result<usize> {
        let profile = self.profiles.require_mut(user)?;
        let added = item_ids
            .iter()
            .filter(|id| profile.saved.insert((*id).clone()))
            .count();
        self.touch();
        Ok(added)
    }

    /// Remove the given item ids from the user's saved set.
    ///
    /// Returns how many ids were actually removed.
    pub fn unsave_vocabulary(&mut self, user: &str, item_ids: &[String]) -> Result<usize> {
        let profile = self.profiles.require_mut(user)?;
        let removed = item_ids
            .iter()
            .filter(|id| profile.saved.remove(id.as_str()))
            .count();
        self.touch();
        Ok(removed)
    }

    /// Resolve the user's saved ids against the vocabulary store.
    ///
    /// Saved ids with no matching item (e.g. after a reseed) are silently
    /// omitted, not an error.
    pub fn saved_items(&self, user: &str) -> Result<Vec<&VocabularyItem>> {
        let profile = self.profiles.require(user)?;
        Ok(profile
            .saved
            .iter()
            .filter_map(|id| self.vocabulary.get(id))
            .collect())
    }
}
