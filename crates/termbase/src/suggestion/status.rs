//! Moderation status state machine and suggestion selectors.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};

/// Moderation status of a suggestion.
///
/// The only legal transitions are `Pending -> Accepted` and
/// `Pending -> Rejected`; both end states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    /// Not yet reviewed.
    Pending,
    /// Approved and materialized into the vocabulary.
    Accepted,
    /// Not approved.
    Rejected,
}

impl SuggestionStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "Pending",
            SuggestionStatus::Accepted => "Accepted",
            SuggestionStatus::Rejected => "Rejected",
        }
    }

    /// Check if this status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SuggestionStatus::Pending)
    }

    /// Apply the transition table.
    ///
    /// Returns the new status, or the current status as the error value so
    /// the caller can report which terminal state blocked the move.
    pub fn transition(self, next: SuggestionStatus) -> std::result::Result<SuggestionStatus, SuggestionStatus> {
        match (self, next) {
            (SuggestionStatus::Pending, SuggestionStatus::Accepted)
            | (SuggestionStatus::Pending, SuggestionStatus::Rejected) => Ok(next),
            _ => Err(self),
        }
    }
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStatus::Pending => write!(f, "pending"),
            SuggestionStatus::Accepted => write!(f, "accepted"),
            SuggestionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Selector for the two suggestion tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// A proposal for an entirely new vocabulary entry.
    NewWord,
    /// A proposal attached to an existing vocabulary item.
    Vocabulary,
}

impl SuggestionKind {
    /// Parse a kind selector, failing with `InvalidSuggestionKind` for
    /// anything but `new_word` or `vocabulary`.
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "new_word" => Ok(SuggestionKind::NewWord),
            "vocabulary" => Ok(SuggestionKind::Vocabulary),
            other => Err(TermbaseError::InvalidSuggestionKind(other.to_string())),
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::NewWord => "new word",
            SuggestionKind::Vocabulary => "vocabulary",
        }
    }
}

impl std::str::FromStr for SuggestionKind {
    type Err = TermbaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionKind::NewWord => write!(f, "new_word"),
            SuggestionKind::Vocabulary => write!(f, "vocabulary"),
        }
    }
}

/// What an attached suggestion proposes for its vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalKind {
    /// An informal or slang variant of the term.
    Colloquial,
    /// An alternate translation.
    Translation,
}

impl ProposalKind {
    /// Normalize free-form input.
    ///
    /// Anything other than `colloquial` is treated as a translation proposal;
    /// this is the documented default, not an error.
    pub fn from_input(input: &str) -> Self {
        if input == "colloquial" {
            ProposalKind::Colloquial
        } else {
            ProposalKind::Translation
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProposalKind::Colloquial => "Colloquial Term",
            ProposalKind::Translation => "Translation",
        }
    }
}

impl std::fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalKind::Colloquial => write!(f, "colloquial"),
            ProposalKind::Translation => write!(f, "translation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert_eq!(
            SuggestionStatus::Pending.transition(SuggestionStatus::Accepted),
            Ok(SuggestionStatus::Accepted)
        );
        assert_eq!(
            SuggestionStatus::Pending.transition(SuggestionStatus::Rejected),
            Ok(SuggestionStatus::Rejected)
        );
    }

    #[test]
    fn test_terminal_states_refuse_transitions() {
        for terminal in [SuggestionStatus::Accepted, SuggestionStatus::Rejected] {
            for next in [
                SuggestionStatus::Pending,
                SuggestionStatus::Accepted,
                SuggestionStatus::Rejected,
            ] {
                assert_eq!(terminal.transition(next), Err(terminal));
            }
        }
        // Pending cannot transition to itself either.
        assert_eq!(
            SuggestionStatus::Pending.transition(SuggestionStatus::Pending),
            Err(SuggestionStatus::Pending)
        );
    }

    #[test]
    fn test_is_terminal() {
        assert!(!SuggestionStatus::Pending.is_terminal());
        assert!(SuggestionStatus::Accepted.is_terminal());
        assert!(SuggestionStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(SuggestionKind::parse("new_word").unwrap(), SuggestionKind::NewWord);
        assert_eq!(SuggestionKind::parse("vocabulary").unwrap(), SuggestionKind::Vocabulary);

        let err = SuggestionKind::parse("colloquial").unwrap_err();
        assert!(matches!(err, TermbaseError::InvalidSuggestionKind(k) if k == "colloquial"));
    }

    #[test]
    fn test_proposal_kind_defaults_to_translation() {
        assert_eq!(ProposalKind::from_input("colloquial"), ProposalKind::Colloquial);
        assert_eq!(ProposalKind::from_input("translation"), ProposalKind::Translation);
        assert_eq!(ProposalKind::from_input(""), ProposalKind::Translation);
        assert_eq!(ProposalKind::from_input("Colloquial"), ProposalKind::Translation);
        assert_eq!(ProposalKind::from_input("anything"), ProposalKind::Translation);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SuggestionStatus::Pending.label(), "Pending");
        assert_eq!(SuggestionKind::NewWord.label(), "new word");
        assert_eq!(ProposalKind::Colloquial.label(), "Colloquial Term");
    }
}
