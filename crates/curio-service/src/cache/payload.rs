//! JSON payload codec for cached values.
//!
//! Cached values are stored as type-erased JSON text. Each cacheable
//! response type enumerates its cache-serializable fields through its
//! serde derive; timestamps serialize as ISO-8601 strings via chrono.

use super::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Encodes a value into the textual cache payload.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CacheError> {
    serde_json::to_string(value).map_err(|e| CacheError::Unencodable(e.to_string()))
}

/// Decodes a cache payload back into a value.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, CacheError> {
    serde_json::from_str(payload).map_err(|e| CacheError::DecodeFailed(e.to_string()))
}
