//! Errors internal to the caching layer.

use thiserror::Error;

/// Errors raised by the cache store and the payload codec.
///
/// None of these cross the service boundary: the read-through layer
/// downgrades every variant to a cache miss or a skipped write.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The store could not be reached during construction or probing.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    /// A single operation against a live store failed.
    #[error("cache operation failed: {0}")]
    OperationFailed(String),

    /// A cached payload could not be decoded.
    #[error("failed to decode cached payload: {0}")]
    DecodeFailed(String),

    /// A value could not be encoded for caching.
    #[error("value cannot be encoded for caching: {0}")]
    Unencodable(String),
}
