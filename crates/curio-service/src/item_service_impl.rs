//! Item service implementation.

use crate::cache::{cache_keys, CacheReadThrough, CacheStore};
use crate::dto::{CreateItemRequest, ItemListResponse, ItemResponse, UpdateItemRequest};
use crate::item_service::ItemService;
use async_trait::async_trait;
use curio_core::{CurioError, CurioResult, ItemId, ItemPatch, NewItem, PageRequest, ValidateExt};
use curio_repository::ItemRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Item service backed by a repository and a cache store.
///
/// Reads go through the cache; every mutation invalidates the listing
/// prefix and, where an existing item is touched, that item's detail
/// prefix.
pub struct ItemServiceImpl {
    repository: Arc<dyn ItemRepository>,
    cache: Arc<dyn CacheStore>,
    cache_ttl: Duration,
}

impl ItemServiceImpl {
    /// Creates a new item service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    async fn list_items(
        &self,
        page: PageRequest,
        title_search: Option<String>,
    ) -> CurioResult<ItemListResponse> {
        debug!(
            "Listing items, skip: {}, limit: {}, title_search: {:?}",
            page.skip, page.limit, title_search
        );

        let key = cache_keys::items_list();
        let repository = Arc::clone(&self.repository);

        self.cache
            .read_through(&key, self.cache_ttl, move || async move {
                let (items, total) = repository.find_all(page, title_search.as_deref()).await?;
                Ok(ItemListResponse {
                    items: items.into_iter().map(ItemResponse::from).collect(),
                    total,
                })
            })
            .await
    }

    async fn get_item(&self, id: ItemId) -> CurioResult<ItemResponse> {
        debug!("Getting item: {}", id);

        let key = cache_keys::item_detail(id);
        let repository = Arc::clone(&self.repository);

        self.cache
            .read_through(&key, self.cache_ttl, move || async move {
                let item = repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CurioError::not_found("Item", id))?;
                Ok(ItemResponse::from(item))
            })
            .await
    }

    async fn create_item(&self, request: CreateItemRequest) -> CurioResult<ItemResponse> {
        debug!("Creating item: {}", request.title);

        request.validate_request()?;

        let item = self.repository.save(&NewItem::from(request)).await?;

        self.cache
            .invalidate_prefix(cache_keys::ITEMS_LIST_PREFIX)
            .await;

        info!("Item created: {}", item.id);
        Ok(ItemResponse::from(item))
    }

    async fn update_item(
        &self,
        id: ItemId,
        request: UpdateItemRequest,
    ) -> CurioResult<ItemResponse> {
        debug!("Updating item: {}", id);

        request.validate_request()?;

        let item = self
            .repository
            .update(id, &ItemPatch::from(request))
            .await?
            .ok_or_else(|| CurioError::not_found("Item", id))?;

        self.cache
            .invalidate_prefix(cache_keys::ITEMS_LIST_PREFIX)
            .await;
        self.cache
            .invalidate_prefix(&cache_keys::item_detail_prefix(id))
            .await;

        info!("Item updated: {}", id);
        Ok(ItemResponse::from(item))
    }

    async fn delete_item(&self, id: ItemId) -> CurioResult<ItemResponse> {
        debug!("Deleting item: {}", id);

        let item = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| CurioError::not_found("Item", id))?;

        self.cache
            .invalidate_prefix(cache_keys::ITEMS_LIST_PREFIX)
            .await;
        self.cache
            .invalidate_prefix(&cache_keys::item_detail_prefix(id))
            .await;

        info!("Item deleted: {}", id);
        Ok(ItemResponse::from(item))
    }
}

impl std::fmt::Debug for ItemServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemServiceImpl").finish_non_exhaustive()
    }
}
