//! Data transfer objects.

mod item_dto;

pub use item_dto::{CreateItemRequest, ItemListResponse, ItemResponse, UpdateItemRequest};
