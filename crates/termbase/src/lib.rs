//! Termbase: crowdsourced curation engine for multilingual vocabulary.
//!
//! A termbase holds canonical terms with definitions, categories, and
//! language-tagged translations. Users propose new terms or additions to
//! existing ones; a moderator accepts or rejects each proposal, and accepted
//! proposals materialize into the vocabulary atomically. Likes and per-user
//! bookmarks are tracked alongside.
//!
//! # Core principles
//!
//! - **Closed state machine**: a suggestion moves `pending -> accepted` or
//!   `pending -> rejected`, never out of a terminal state.
//! - **All-or-nothing approval**: every check runs before the first write,
//!   so the store never holds a half-applied decision.
//! - **Deduplicated by construction**: terms, translation tuples, and
//!   proposals are checked against the stores at intake.
//!
//! # Example
//!
//! ```
//! use termbase::{NewWordDraft, Termbase};
//!
//! let mut base = Termbase::new();
//!
//! let draft = NewWordDraft {
//!     term: "Triage".to_string(),
//!     definition: "Sorting patients by urgency.".to_string(),
//!     translation: "triaje".to_string(),
//!     language: "es".to_string(),
//!     category: "procedures".to_string(),
//! };
//! let suggestion_id = base.submit_new_word(&draft).unwrap().id.clone();
//!
//! let item = base.approve_new_word(&suggestion_id).unwrap();
//! assert_eq!(item.term, "triage");
//! ```

pub mod error;
pub mod persistence;
pub mod profile;
pub mod seed;
pub mod suggestion;
pub mod vocabulary;

mod engagement;
mod id;
mod language;
mod moderation;
mod termbase;

pub use crate::engagement::LikeOutcome;
pub use crate::error::{Result, TermbaseError};
pub use crate::moderation::NewWordDraft;
pub use crate::profile::{ProfileStore, Role, UserProfile};
pub use crate::seed::{SeedItem, SeedMetadata, SeedReport};
pub use crate::suggestion::{
    NewWordSuggestion, ProposalKind, SuggestionCounts, SuggestionKind, SuggestionRef,
    SuggestionStatus, SuggestionStore, VocabularySuggestion,
};
pub use crate::termbase::{Termbase, TermbaseSummary, DEFAULT_CATEGORY, TERMBASE_VERSION};
pub use crate::vocabulary::{Translation, TranslationFlags, VocabularyItem, VocabularyStore};
