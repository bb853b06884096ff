//! Application state for Axum handlers.

use curio_service::ItemService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<dyn ItemService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(item_service: Arc<dyn ItemService>) -> Self {
        Self { item_service }
    }
}
