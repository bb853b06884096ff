//! Postgres item repository implementation.

use crate::{pool::DatabasePool, traits::ItemRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curio_core::{CurioResult, Item, ItemId, ItemPatch, NewItem, PageRequest};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres item repository implementation.
#[derive(Clone)]
pub struct PostgresItemRepository {
    pool: Arc<DatabasePool>,
}

impl PostgresItemRepository {
    /// Creates a new Postgres item repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an item.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    title: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId::from_i64(row.id),
            title: row.title,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Builds the `ILIKE` pattern for a title substring search.
fn title_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_all(
        &self,
        page: PageRequest,
        title_search: Option<&str>,
    ) -> CurioResult<(Vec<Item>, u64)> {
        debug!(
            "Finding items, skip: {}, limit: {}, title_search: {:?}",
            page.skip, page.limit, title_search
        );

        let pattern = title_search.map(title_pattern);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM items WHERE $1::text IS NULL OR title ILIKE $1",
        )
        .bind(pattern.as_deref())
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, description, is_active, created_at, updated_at
            FROM items
            WHERE $1::text IS NULL OR title ILIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern.as_deref())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool.inner())
        .await?;

        let items = rows.into_iter().map(Item::from).collect();
        Ok((items, total as u64))
    }

    async fn find_by_id(&self, id: ItemId) -> CurioResult<Option<Item>> {
        debug!("Finding item by id: {}", id);

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, description, is_active, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn save(&self, item: &NewItem) -> CurioResult<Item> {
        debug!("Saving item: {}", item.title);

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (title, description, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(&item.title)
        .bind(item.description.as_deref())
        .bind(item.is_active)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Item::from(row))
    }

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> CurioResult<Option<Item>> {
        debug!("Updating item: {}", id);

        // COALESCE keeps the stored value for fields the patch leaves unset.
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.is_active)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn delete(&self, id: ItemId) -> CurioResult<Option<Item>> {
        debug!("Deleting item: {}", id);

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Item::from))
    }
}
