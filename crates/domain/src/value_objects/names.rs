//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character nickname
const MAX_NICKNAME_LENGTH: usize = 40;

/// Shown wherever a character has not picked a nickname yet.
pub const ANONYMOUS_NICKNAME: &str = "Andarilho Misterioso";

// ============================================================================
// Nickname
// ============================================================================

/// A validated character nickname (non-empty, <=40 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Create a new validated nickname.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The nickname is empty after trimming
    /// - The nickname exceeds 40 characters after trimming
    pub fn new(nickname: impl Into<String>) -> Result<Self, DomainError> {
        let nickname = nickname.into();
        let trimmed = nickname.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Nickname cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NICKNAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Nickname cannot exceed {} characters",
                MAX_NICKNAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the nickname as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> String {
        nickname.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_nickname() {
        let nickname = Nickname::new("Ravena").unwrap();
        assert_eq!(nickname.as_str(), "Ravena");
        assert_eq!(nickname.to_string(), "Ravena");
    }

    #[test]
    fn empty_nickname_rejected() {
        let err = Nickname::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn nickname_is_trimmed() {
        let nickname = Nickname::new("  Lobo Cinzento  ").unwrap();
        assert_eq!(nickname.as_str(), "Lobo Cinzento");
    }

    #[test]
    fn too_long_rejected() {
        assert!(Nickname::new("a".repeat(41)).is_err());
        assert!(Nickname::new("a".repeat(40)).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        let result: Result<Nickname, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
