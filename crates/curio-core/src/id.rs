//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for item IDs.
///
/// Item IDs are assigned by the database sequence, so there is no
/// constructor for fresh random IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemId(pub i64);

impl ItemId {
    /// Creates an item ID from a raw database value.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Parses an item ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ItemId::parse("42").unwrap();
        assert_eq!(id, ItemId::from_i64(42));
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ItemId::parse("not-a-number").is_err());
        assert!(ItemId::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemId::from_i64(7).to_string(), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ItemId::from_i64(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
