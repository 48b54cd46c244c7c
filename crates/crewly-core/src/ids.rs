//! Strongly typed identifiers.
//!
//! Newtype wrappers around [`Uuid`] that prevent accidental misuse of
//! different ID types at compile time.
//!
//! # Example
//!
//! ```
//! use crewly_core::{CompanyId, UserId};
//!
//! let company = CompanyId::new();
//! let user = UserId::new();
//!
//! fn requires_company(id: CompanyId) -> String {
//!     id.to_string()
//! }
//!
//! let _ = requires_company(company);
//! // requires_company(user); // does not compile
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The underlying UUID parse error message.
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for companies.
    ///
    /// Companies are the tenants of the system; every employee record
    /// belongs to exactly one company.
    CompanyId
);

define_id!(
    /// Strongly typed identifier for user accounts.
    ///
    /// Covers all roles: super admins, company admins, and employees.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_valid_id() {
        let id = CompanyId::new();
        let id_str = id.to_string();
        // UUID format: 8-4-4-4-12 hex digits
        assert_eq!(id_str.len(), 36);
        assert!(id_str.contains('-'));
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_default_creates_distinct_ids() {
        let id1 = CompanyId::default();
        let id2 = CompanyId::default();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_parse_valid_uuid() {
        let id: CompanyId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_invalid_uuid_returns_error() {
        let result: std::result::Result<UserId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "UserId");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = CompanyId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn test_can_use_as_hashmap_key() {
        use std::collections::HashMap;
        let mut map: HashMap<UserId, &str> = HashMap::new();
        let id1 = UserId::new();
        let id2 = UserId::new();

        map.insert(id1, "first");
        map.insert(id2, "second");

        assert_eq!(map.get(&id1), Some(&"first"));
        assert_eq!(map.get(&id2), Some(&"second"));
    }
}
