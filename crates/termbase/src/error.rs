//! Error types for the termbase library.

use std::path::PathBuf;
use thiserror::Error;

use crate::suggestion::SuggestionStatus;

/// Main error type for termbase operations.
#[derive(Debug, Error)]
pub enum TermbaseError {
    /// Referenced vocabulary item (by id or term) does not exist.
    #[error("vocabulary item '{0}' not found")]
    ItemNotFound(String),

    /// Referenced suggestion does not exist in the selected table.
    #[error("suggestion '{0}' not found")]
    SuggestionNotFound(String),

    /// No profile is registered for the user.
    #[error("user profile '{0}' not found")]
    ProfileNotFound(String),

    /// A vocabulary item with the supplied identifier already exists.
    #[error("vocabulary identifier '{0}' already exists")]
    DuplicateIdentifier(String),

    /// The term already exists as a vocabulary item or a pending suggestion.
    #[error("term '{0}' already exists in the vocabulary or is pending review")]
    DuplicateTerm(String),

    /// The (item, language, text) translation tuple is already stored.
    #[error("translation '{text}' ({language}) already exists for item '{item_id}'")]
    DuplicateTranslation {
        item_id: String,
        language: String,
        text: String,
    },

    /// An identical suggestion is already on file for the item.
    #[error("an identical suggestion already exists for item '{0}'")]
    DuplicateSuggestion(String),

    /// Transition attempted on a suggestion that is no longer pending.
    #[error("suggestion '{id}' has already been {status}")]
    InvalidState { id: String, status: SuggestionStatus },

    /// Unrecognized suggestion kind selector.
    #[error("invalid suggestion kind '{0}' (expected 'new_word' or 'vocabulary')")]
    InvalidSuggestionKind(String),

    /// Malformed input value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Error saving or loading a termbase document.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for termbase operations.
pub type Result<T> = std::result::Result<T, TermbaseError>;
