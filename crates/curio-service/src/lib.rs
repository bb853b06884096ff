//! # Curio Service
//!
//! Business logic layer for the Curio item service: the read-through
//! caching infrastructure and the item use cases built on top of it.

pub mod cache;
pub mod dto;
pub mod item_service;
mod item_service_impl;

pub use cache::*;
pub use dto::*;
pub use item_service::*;
pub use item_service_impl::ItemServiceImpl;
