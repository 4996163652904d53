//! Suggestion records, the moderation status machine, and their store.

mod status;
mod store;
mod suggestion;

pub use status::{ProposalKind, SuggestionKind, SuggestionStatus};
pub use store::{SuggestionCounts, SuggestionStore};
pub use suggestion::{NewWordSuggestion, SuggestionRef, VocabularySuggestion};
