//! Cache store adapter with live and degraded variants.
//!
//! The variant is selected once at startup by [`connect_store`]: a
//! successful connection and liveness probe yields the Redis-backed store,
//! anything else yields the no-op degraded store for the process lifetime.
//! No reconnection attempts are made.

use super::CacheError;
use async_trait::async_trait;
use curio_config::RedisConfig;
use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default TTL for cached items (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Key-value cache store reachable over a network connection.
///
/// Values are opaque text payloads; encoding is the caller's concern.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Gets the payload stored under a key, or `None` if absent/expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a payload under a key with a time-to-live.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Deletes the given keys in one batch call.
    async fn delete_keys(&self, keys: &[String]) -> Result<(), CacheError>;

    /// Enumerates all keys matching a glob-style pattern.
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, CacheError>;
}

/// Redis-backed cache store.
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Creates a store around an existing connection pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from configuration and probes it.
    pub async fn connect(config: &RedisConfig) -> Result<Self, CacheError> {
        let mut cfg = deadpool_redis::Config::from_url(&config.url);
        cfg.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size as usize));

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Unavailable(format!("failed to create pool: {}", e)))?;

        let store = Self::new(pool);
        store.ping().await?;
        Ok(store)
    }

    /// Issues a liveness probe against the store.
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.pool.get().await.map_err(|e| {
            CacheError::Unavailable(format!("failed to get connection: {}", e))
        })?;
        let pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Unavailable(format!("liveness probe failed: {}", e)))?;
        debug!("Cache store probe replied: {}", pong);
        Ok(())
    }

    /// Gets a connection from the pool.
    async fn conn(&self) -> Result<deadpool_redis::Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::OperationFailed(format!("failed to get connection: {}", e)))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            CacheError::OperationFailed(format!("failed to get key '{}': {}", key, e))
        })?;
        Ok(value)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| {
                CacheError::OperationFailed(format!("failed to set key '{}': {}", key, e))
            })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn().await?;
        let deleted: i64 = conn
            .del(keys.to_vec())
            .await
            .map_err(|e| CacheError::OperationFailed(format!("failed to delete keys: {}", e)))?;

        debug!("Deleted {} cache keys", deleted);
        Ok(())
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        let mut conn = self.conn().await?;
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = deadpool_redis::redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(|e| {
                    CacheError::OperationFailed(format!(
                        "failed to scan keys matching '{}': {}",
                        pattern, e
                    ))
                })?;

            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        Ok(keys)
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore").finish_non_exhaustive()
    }
}

/// No-op store used when the cache backend is unreachable or disabled.
///
/// Reads always miss, writes and deletes do nothing, scans yield nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DegradedCacheStore;

#[async_trait]
impl CacheStore for DegradedCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete_keys(&self, _keys: &[String]) -> Result<(), CacheError> {
        Ok(())
    }

    async fn scan_keys(&self, _pattern: &str) -> Result<Vec<String>, CacheError> {
        Ok(Vec::new())
    }
}

/// Selects the cache store variant for this process.
///
/// Connection or probe failures are logged once here; the service keeps
/// running against the degraded store rather than refusing to start.
pub async fn connect_store(config: &RedisConfig) -> Arc<dyn CacheStore> {
    if !config.enabled {
        info!("Caching disabled by configuration, using degraded store");
        return Arc::new(DegradedCacheStore);
    }

    match RedisCacheStore::connect(config).await {
        Ok(store) => {
            info!("Connected to cache store at {}", config.url);
            Arc::new(store)
        }
        Err(err) => {
            error!("Cache store unreachable, running without caching: {}", err);
            Arc::new(DegradedCacheStore)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_degraded_store_reads_miss() {
        let store = DegradedCacheStore;
        assert!(store.get("items_list:list_items").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_degraded_store_writes_are_noops() {
        let store = DegradedCacheStore;
        store
            .set_with_expiry("key", "value", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(store.get("key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_degraded_store_scan_is_empty() {
        let store = DegradedCacheStore;
        assert!(store.scan_keys("items_list:*").await.unwrap().is_empty());
        store
            .delete_keys(&["items_list:list_items".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_connect_store_disabled_uses_degraded_variant() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        let store = connect_store(&config).await;
        assert!(store.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_connect_store_unreachable_degrades() {
        // Nothing listens on this port; the probe must fail and the
        // returned store must behave like an absent cache.
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            pool_size: 1,
            enabled: true,
            cache_ttl_secs: 300,
        };
        let store = connect_store(&config).await;
        assert!(store.get("anything").await.unwrap().is_none());
        assert!(store.scan_keys("*").await.unwrap().is_empty());
    }
}
