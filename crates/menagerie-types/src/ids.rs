//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Animal records are identified by an [`AnimalId`] assigned by the
//! persistence layer when the record is created. IDs use UUID v7
//! (time-ordered) so that `PostgreSQL` index pages fill sequentially.
//!
//! Identifiers arrive from the outside world as path segments, so the
//! textual form is parsed with [`AnimalId::parse`], which reports a
//! malformed value as [`InvalidIdError`] rather than panicking.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A string could not be parsed into an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid id {raw:?}: {reason}")]
pub struct InvalidIdError {
    /// The text that failed to parse.
    pub raw: String,
    /// Why the parse failed.
    pub reason: String,
}

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Parse an identifier from its textual (hyphenated or simple) form.
            ///
            /// # Errors
            ///
            /// Returns [`InvalidIdError`] if `raw` is not a valid UUID.
            pub fn parse(raw: &str) -> Result<Self, InvalidIdError> {
                Uuid::parse_str(raw).map(Self).map_err(|e| InvalidIdError {
                    raw: raw.to_owned(),
                    reason: e.to_string(),
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an animal record.
    AnimalId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = AnimalId::new();
        let b = AnimalId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn serializes_as_bare_uuid_string() {
        let id = AnimalId::new();
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json, Some(format!("\"{id}\"")));
    }

    #[test]
    fn parse_accepts_display_output() {
        let id = AnimalId::new();
        assert_eq!(AnimalId::parse(&id.to_string()), Ok(id));
        assert_eq!(id.to_string().parse::<AnimalId>(), Ok(id));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = AnimalId::parse("not-an-id").err();
        assert!(err.is_some_and(|e| e.raw == "not-an-id"));
        assert!(AnimalId::parse("").is_err());
    }
}
