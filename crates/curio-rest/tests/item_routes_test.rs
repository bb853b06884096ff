//! Integration tests for the REST surface, using a mock item service.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use curio_config::ServerConfig;
use curio_core::{CurioError, CurioResult, ItemId, PageRequest};
use curio_rest::{create_router, AppState};
use curio_service::{
    CreateItemRequest, ItemListResponse, ItemResponse, ItemService, UpdateItemRequest,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Mock item service with a fixed inventory.
struct MockItemService {
    items: Vec<ItemResponse>,
    last_list_call: Mutex<Option<(PageRequest, Option<String>)>>,
}

impl MockItemService {
    fn new() -> Self {
        Self {
            items: vec![test_item(1, "Compass"), test_item(2, "Sextant")],
            last_list_call: Mutex::new(None),
        }
    }
}

fn test_item(id: i64, title: &str) -> ItemResponse {
    let now = Utc::now();
    ItemResponse {
        id: ItemId::from_i64(id),
        title: title.to_string(),
        description: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ItemService for MockItemService {
    async fn list_items(
        &self,
        page: PageRequest,
        title_search: Option<String>,
    ) -> CurioResult<ItemListResponse> {
        *self.last_list_call.lock().unwrap() = Some((page, title_search));
        Ok(ItemListResponse {
            items: self.items.clone(),
            total: self.items.len() as u64,
        })
    }

    async fn get_item(&self, id: ItemId) -> CurioResult<ItemResponse> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CurioError::not_found("Item", id))
    }

    async fn create_item(&self, request: CreateItemRequest) -> CurioResult<ItemResponse> {
        let mut item = test_item(100, &request.title);
        item.description = request.description;
        item.is_active = request.is_active;
        Ok(item)
    }

    async fn update_item(
        &self,
        id: ItemId,
        request: UpdateItemRequest,
    ) -> CurioResult<ItemResponse> {
        let mut item = self.get_item(id).await?;
        if let Some(title) = request.title {
            item.title = title;
        }
        Ok(item)
    }

    async fn delete_item(&self, id: ItemId) -> CurioResult<ItemResponse> {
        self.get_item(id).await
    }
}

fn test_router() -> (Router, Arc<MockItemService>) {
    let service = Arc::new(MockItemService::new());
    let state = AppState::new(service.clone());
    (create_router(state, &ServerConfig::default()), service)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_items_returns_envelope() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/items/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["total"], json!(2));
    assert_eq!(body["data"]["items"][0]["title"], json!("Compass"));
}

#[tokio::test]
async fn test_list_items_passes_query_parameters_through() {
    let (router, service) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/items/?skip=5&limit=2&title_search=comp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let (page, search) = service.last_list_call.lock().unwrap().clone().unwrap();
    assert_eq!(page.skip, 5);
    assert_eq!(page.limit, 2);
    assert_eq!(search, Some("comp".to_string()));
}

#[tokio::test]
async fn test_get_item_found() {
    let (router, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/items/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["title"], json!("Compass"));
}

#[tokio::test]
async fn test_get_item_not_found() {
    let (router, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/items/99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_get_item_invalid_id() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/items/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_create_item_returns_created() {
    let (router, _) = test_router();

    let payload = json!({ "title": "Astrolabe", "description": "Brass" });
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["title"], json!("Astrolabe"));
    assert_eq!(body["data"]["is_active"], json!(true));
}

#[tokio::test]
async fn test_update_item_applies_changes() {
    let (router, _) = test_router();

    let payload = json!({ "title": "Compass (restored)" });
    let response = router
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/items/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], json!("Compass (restored)"));
}

#[tokio::test]
async fn test_delete_item_returns_last_state() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/items/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], json!("Sextant"));
}

#[tokio::test]
async fn test_delete_missing_item_is_not_found() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/items/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (router, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_root_endpoint() {
    let (router, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("Curio"));
}
