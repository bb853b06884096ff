//! Repository trait definitions.

use async_trait::async_trait;
use curio_core::{CurioResult, Item, ItemId, ItemPatch, NewItem, PageRequest};

/// Item repository trait.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Finds a page of items, optionally filtered by a case-insensitive
    /// title substring, together with the total number of matching rows.
    async fn find_all(
        &self,
        page: PageRequest,
        title_search: Option<&str>,
    ) -> CurioResult<(Vec<Item>, u64)>;

    /// Finds an item by ID.
    async fn find_by_id(&self, id: ItemId) -> CurioResult<Option<Item>>;

    /// Saves a new item and returns the stored row.
    async fn save(&self, item: &NewItem) -> CurioResult<Item>;

    /// Applies a partial update and returns the updated row, or `None` if
    /// no item with that ID exists.
    async fn update(&self, id: ItemId, patch: &ItemPatch) -> CurioResult<Option<Item>>;

    /// Deletes an item and returns the deleted row, or `None` if no item
    /// with that ID exists.
    async fn delete(&self, id: ItemId) -> CurioResult<Option<Item>>;
}
