//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A window over a list of results, expressed as skip/limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items to skip from the start of the result set.
    pub skip: u64,
    /// Maximum number of items to return.
    pub limit: u64,
}

impl PageRequest {
    /// The default number of items per page.
    pub const DEFAULT_LIMIT: u64 = 100;
    /// The maximum allowed page size.
    pub const MAX_LIMIT: u64 = 1000;

    /// Creates a new page request.
    #[must_use]
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.min(Self::MAX_LIMIT),
        }
    }

    /// Creates a page request for the start of the result set.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.skip
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}
