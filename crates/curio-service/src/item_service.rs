//! Item service trait definition.

use crate::dto::{CreateItemRequest, ItemListResponse, ItemResponse, UpdateItemRequest};
use async_trait::async_trait;
use curio_core::{CurioResult, ItemId, PageRequest};

/// Item service trait.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Lists items with pagination and an optional title filter.
    async fn list_items(
        &self,
        page: PageRequest,
        title_search: Option<String>,
    ) -> CurioResult<ItemListResponse>;

    /// Gets an item by ID.
    async fn get_item(&self, id: ItemId) -> CurioResult<ItemResponse>;

    /// Creates a new item.
    async fn create_item(&self, request: CreateItemRequest) -> CurioResult<ItemResponse>;

    /// Updates an existing item.
    async fn update_item(&self, id: ItemId, request: UpdateItemRequest)
        -> CurioResult<ItemResponse>;

    /// Deletes an item and returns its last state.
    async fn delete_item(&self, id: ItemId) -> CurioResult<ItemResponse>;
}
