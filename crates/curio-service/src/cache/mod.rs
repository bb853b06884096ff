//! Caching infrastructure for the service layer.
//!
//! This module provides a cache store abstraction with a Redis
//! implementation, a JSON payload codec, read-through lookup, and
//! prefix-based invalidation. Cache failures are contained here and never
//! reach callers: a broken store only costs latency, never correctness.

pub mod cache_keys;
mod error;
pub mod payload;
mod read_through;
mod store;

pub use error::CacheError;
pub use read_through::CacheReadThrough;
pub use store::{connect_store, CacheStore, DegradedCacheStore, RedisCacheStore, DEFAULT_TTL};

#[cfg(test)]
pub(crate) mod test_support;
