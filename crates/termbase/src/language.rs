//! Language-code validation helpers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TermbaseError};

static LANGUAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z]{2}$").expect("static language pattern"));

/// Validate a 2-letter language code, returning it lowercased.
pub fn validate(language: &str) -> Result<String> {
    let code = language.trim();
    if !LANGUAGE_RE.is_match(code) {
        return Err(TermbaseError::InvalidArgument(format!(
            "language code '{}' must be exactly 2 letters",
            language
        )));
    }
    Ok(code.to_lowercase())
}

/// Truncate arbitrary input to at most 2 characters, then validate.
///
/// Suggestion submissions accept sloppy language input ("eng" becomes "en");
/// everything else goes through [`validate`] unchanged.
pub fn truncate_and_validate(language: &str) -> Result<String> {
    let trimmed = language.trim();
    let cut: String = trimmed.chars().take(2).collect();
    validate(&cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_two_letters() {
        assert_eq!(validate("en").unwrap(), "en");
        assert_eq!(validate("ES").unwrap(), "es");
        assert_eq!(validate(" fr ").unwrap(), "fr");
    }

    #[test]
    fn test_validate_rejects_bad_codes() {
        assert!(validate("eng").is_err());
        assert!(validate("e").is_err());
        assert!(validate("").is_err());
        assert!(validate("3x").is_err());
    }

    #[test]
    fn test_truncate_and_validate() {
        assert_eq!(truncate_and_validate("eng").unwrap(), "en");
        assert_eq!(truncate_and_validate("ES-419").unwrap(), "es");
        assert!(truncate_and_validate("").is_err());
        assert!(truncate_and_validate("1234").is_err());
    }
}
