//! Read-through lookup and prefix invalidation over a cache store.

use super::{payload, CacheStore};
use async_trait::async_trait;
use curio_core::CurioResult;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Extension trait layering read-through semantics on any [`CacheStore`].
///
/// The wrapped operation is passed in as a closure, so call sites compose
/// explicitly rather than through ambient state. The data returned to the
/// caller never depends on the health of the store: every store or codec
/// failure is logged and downgraded to a miss or a skipped write, and only
/// the producer's own errors propagate.
#[async_trait]
pub trait CacheReadThrough: CacheStore {
    /// Looks up `key`, falling back to `producer` on a miss.
    ///
    /// On a miss the produced value is encoded and stored under `key` with
    /// the given TTL; a cached payload that fails to decode is discarded
    /// and treated as a miss.
    async fn read_through<T, F, Fut>(&self, key: &str, ttl: Duration, producer: F) -> CurioResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = CurioResult<T>> + Send,
    {
        let cached = match self.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!("Cache read failed for key '{}': {}", key, err);
                None
            }
        };

        if let Some(text) = cached {
            match payload::decode::<T>(&text) {
                Ok(value) => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(value);
                }
                Err(err) => {
                    warn!("Discarding cached payload for key '{}': {}", key, err);
                }
            }
        } else {
            debug!("Cache miss for key '{}'", key);
        }

        // The producer is the source of truth; it always runs on a miss.
        let result = producer().await?;

        match payload::encode(&result) {
            Ok(encoded) => {
                if let Err(err) = self.set_with_expiry(key, &encoded, ttl).await {
                    warn!("Cache write failed for key '{}': {}", key, err);
                }
            }
            Err(err) => {
                warn!("Skipping cache write for key '{}': {}", key, err);
            }
        }

        Ok(result)
    }

    /// Deletes every cache entry whose key starts with `prefix`.
    ///
    /// Best-effort: store failures are logged and swallowed, and nothing
    /// is deleted when no key matches.
    async fn invalidate_prefix(&self, prefix: &str) {
        let pattern = format!("{}:*", prefix);

        let keys = match self.scan_keys(&pattern).await {
            Ok(keys) => keys,
            Err(err) => {
                warn!("Cache scan failed for pattern '{}': {}", pattern, err);
                return;
            }
        };

        if keys.is_empty() {
            debug!("No cache entries to invalidate for pattern '{}'", pattern);
            return;
        }

        match self.delete_keys(&keys).await {
            Ok(()) => info!(
                "Invalidated {} cache entries for prefix '{}'",
                keys.len(),
                prefix
            ),
            Err(err) => warn!("Cache invalidation failed for prefix '{}': {}", prefix, err),
        }
    }
}

impl<S: CacheStore + ?Sized> CacheReadThrough for S {}
