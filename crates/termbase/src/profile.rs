//! User profiles and their saved-vocabulary bookmark sets.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermbaseError};

/// Role of a registered user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user; submits and likes suggestions.
    #[default]
    Interpreter,
    /// Moderator; decides suggestions.
    Overseer,
    /// Full administrative access.
    Superuser,
}

impl Role {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Interpreter => "Interpreter",
            Role::Overseer => "Overseer",
            Role::Superuser => "Superuser",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = TermbaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "interpreter" => Ok(Role::Interpreter),
            "overseer" => Ok(Role::Overseer),
            "superuser" => Ok(Role::Superuser),
            other => Err(TermbaseError::InvalidArgument(format!(
                "unknown role '{}'",
                other
            ))),
        }
    }
}

/// One profile per user, holding the role and the bookmark set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier (one profile each).
    pub user: String,

    /// Assigned role.
    pub role: Role,

    /// Saved vocabulary item identifiers, deduplicated.
    pub saved: BTreeSet<String>,

    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with an empty bookmark set.
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
            saved: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }
}

/// Owns all user profiles, keyed by user identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    profiles: IndexMap<String, UserProfile>,
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create a profile for the user. Idempotent; an existing profile
    /// keeps its role and bookmarks.
    pub fn ensure(&mut self, user: &str, role: Role) -> &UserProfile {
        if !self.profiles.contains_key(user) {
            self.profiles
                .insert(user.to_string(), UserProfile::new(user, role));
        }
        self.profiles.get(user).unwrap()
    }

    /// Get a profile by user identifier.
    pub fn get(&self, user: &str) -> Option<&UserProfile> {
        self.profiles.get(user)
    }

    /// Get a profile, failing with `ProfileNotFound`.
    pub fn require(&self, user: &str) -> Result<&UserProfile> {
        self.get(user)
            .ok_or_else(|| TermbaseError::ProfileNotFound(user.to_string()))
    }

    pub(crate) fn require_mut(&mut self, user: &str) -> Result<&mut UserProfile> {
        self.profiles
            .get_mut(user)
            .ok_or_else(|| TermbaseError::ProfileNotFound(user.to_string()))
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_is_idempotent() {
        let mut store = ProfileStore::new();
        store.ensure("ana", Role::Overseer);
        store.require_mut("ana").unwrap().saved.insert("aaaa000001".to_string());

        // A second ensure must not reset role or bookmarks.
        let profile = store.ensure("ana", Role::Interpreter);
        assert_eq!(profile.role, Role::Overseer);
        assert_eq!(profile.saved.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_require_missing_profile() {
        let store = ProfileStore::new();
        let err = store.require("nobody").unwrap_err();
        assert!(matches!(err, TermbaseError::ProfileNotFound(u) if u == "nobody"));
    }

    #[test]
    fn test_role_parsing_and_default() {
        assert_eq!(Role::default(), Role::Interpreter);
        assert_eq!("overseer".parse::<Role>().unwrap(), Role::Overseer);
        assert_eq!("superuser".parse::<Role>().unwrap(), Role::Superuser);
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(Role::Overseer.label(), "Overseer");
    }
}
