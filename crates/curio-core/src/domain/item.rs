//! The item entity and its write-side value objects.

use crate::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a new item; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// A partial update to an item. `None` fields keep their current values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
