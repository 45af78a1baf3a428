//! Strongly-typed ID wrappers for record types
//!
//! Identifiers are opaque: the record store may hand us anything (UUIDs,
//! database object ids), so they wrap a `String`. Newly created records get
//! a UUID v4.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an identifier supplied by the record store
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form for tables: prefix plus the first 8 characters
            pub fn short(&self) -> String {
                let head: String = self.0.chars().take(8).collect();
                format!("{}{}", $display_prefix, head)
            }

            /// Check whether user input refers to this ID
            ///
            /// Accepts the full raw ID, the short form, or a bare prefix of at
            /// least 4 characters.
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                let bare = input.strip_prefix($display_prefix).unwrap_or(input);
                if bare.is_empty() {
                    return false;
                }
                self.0 == bare || (bare.chars().count() >= 4 && self.0.starts_with(bare))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            /// Strings are kept, numbers stringified, anything else gets a fresh ID
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = match Value::deserialize(deserializer)? {
                    Value::String(s) if !s.trim().is_empty() => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                Ok(raw.map(Self::from_raw).unwrap_or_default())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(SavingId, "sav-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short_form() {
        let id = SavingId::from_raw("64f1a2b3c4d5e6f708192a3b");
        assert_eq!(id.short(), "sav-64f1a2b3");
    }

    #[test]
    fn test_matches() {
        let id = ExpenseId::from_raw("64f1a2b3c4d5e6f708192a3b");
        assert!(id.matches("64f1a2b3c4d5e6f708192a3b"));
        assert!(id.matches("exp-64f1a2b3"));
        assert!(id.matches("64f1"));
        assert!(!id.matches("64f"));
        assert!(!id.matches("exp-"));
        assert!(!id.matches("ffff"));
    }

    #[test]
    fn test_opaque_serialization() {
        let id: ExpenseId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let id: ExpenseId = serde_json::from_str("7").unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn test_null_or_blank_id_gets_fresh_uuid() {
        let from_null: SavingId = serde_json::from_str("null").unwrap();
        let from_blank: SavingId = serde_json::from_str("\"  \"").unwrap();
        assert!(Uuid::parse_str(from_null.as_str()).is_ok());
        assert!(Uuid::parse_str(from_blank.as_str()).is_ok());
    }
}
