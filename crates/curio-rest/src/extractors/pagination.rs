//! Listing query extractor.

use curio_core::PageRequest;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the item listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Number of items to skip.
    #[serde(default)]
    pub skip: Option<u64>,
    /// Maximum number of items to return.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Case-insensitive title substring filter.
    #[serde(default)]
    pub title_search: Option<String>,
}

impl ListQuery {
    /// Returns the page window for this query.
    #[must_use]
    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.skip.unwrap_or(0),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }

    /// Returns the title filter, with blank input normalized to `None`.
    #[must_use]
    pub fn title_search(&self) -> Option<String> {
        self.title_search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: Some(0),
            limit: Some(PageRequest::DEFAULT_LIMIT),
            title_search: None,
        }
    }
}
