//! Item management controller.

use crate::{
    extractors::ListQuery,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use curio_core::{CurioError, ItemId};
use curio_service::{CreateItemRequest, ItemListResponse, ItemResponse, UpdateItemRequest};
use tracing::debug;

/// Creates the item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// List items.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ListQuery),
    responses(
        (status = 200, description = "A page of items", body = ItemListResponse)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<ItemListResponse> {
    debug!("List items request");

    let response = state
        .item_service
        .list_items(query.page(), query.title_search())
        .await?;
    ok(response)
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ItemResponse>>), AppError> {
    debug!("Create item request: {}", request.title);

    let response = state.item_service.create_item(request).await?;
    Ok(created(response))
}

/// Get an item by ID.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ItemResponse> {
    debug!("Get item request: {}", id);

    let item_id = parse_item_id(&id)?;
    let response = state.item_service.get_item(item_id).await?;
    ok(response)
}

/// Update an item.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "The updated item", body = ItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateItemRequest>,
) -> ApiResult<ItemResponse> {
    debug!("Update item request: {}", id);

    let item_id = parse_item_id(&id)?;
    let response = state.item_service.update_item(item_id, request).await?;
    ok(response)
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "The deleted item", body = ItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ItemResponse> {
    debug!("Delete item request: {}", id);

    let item_id = parse_item_id(&id)?;
    let response = state.item_service.delete_item(item_id).await?;
    ok(response)
}

/// Helper to parse an item ID from a path parameter.
fn parse_item_id(id: &str) -> Result<ItemId, AppError> {
    ItemId::parse(id)
        .map_err(|_| AppError(CurioError::Validation(format!("Invalid item ID: {}", id))))
}
