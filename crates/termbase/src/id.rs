//! Opaque identifier generation for vocabulary items and suggestions.

/// Length of a vocabulary item identifier.
///
/// 10 hex characters is only 40 bits of the underlying 128-bit random value,
/// so callers must re-check the store for collisions before committing an id.
pub const TOKEN_LEN: usize = 10;

/// Generate a short opaque token: a 128-bit random value, hex-encoded and
/// truncated to [`TOKEN_LEN`] characters.
pub fn token() -> String {
    let mut id = format!("{:032x}", fastrand::u128(..));
    id.truncate(TOKEN_LEN);
    id
}

/// Generate a suggestion identifier (shared prefix across both kinds).
pub fn suggestion_id() -> String {
    format!("sug_{}", token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let id = token();
        assert_eq!(id.len(), TOKEN_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_vary() {
        let a = token();
        let b = token();
        // 40 bits of randomness; two draws colliding would be astonishing.
        assert_ne!(a, b);
    }

    #[test]
    fn test_suggestion_id_prefix() {
        let id = suggestion_id();
        assert!(id.starts_with("sug_"));
        assert_eq!(id.len(), "sug_".len() + TOKEN_LEN);
    }
}
