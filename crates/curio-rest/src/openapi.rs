//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use curio_core::{ErrorResponse, FieldError, ItemId};
use curio_service::{CreateItemRequest, ItemListResponse, ItemResponse, UpdateItemRequest};
use utoipa::OpenApi;

/// OpenAPI documentation for the Curio item API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curio Item API",
        version = "0.1.0",
        description = "RESTful CRUD API for catalog items with a Redis read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Item endpoints
        crate::controllers::item_controller::list_items,
        crate::controllers::item_controller::create_item,
        crate::controllers::item_controller::get_item,
        crate::controllers::item_controller::update_item,
        crate::controllers::item_controller::delete_item,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            ItemId,
            ErrorResponse,
            FieldError,
            CreateItemRequest,
            UpdateItemRequest,
            ItemResponse,
            ItemListResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "items", description = "Item management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
