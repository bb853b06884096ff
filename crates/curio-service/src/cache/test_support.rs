//! Cache store doubles shared by the service-layer tests.

use super::{CacheError, CacheStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

/// Cache store backed by a map, recording the operations performed on it.
///
/// TTLs are accepted and ignored: expiry is the real store's concern.
#[derive(Default)]
pub(crate) struct InMemoryCacheStore {
    entries: Mutex<BTreeMap<String, String>>,
    ops: Mutex<Vec<String>>,
}

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub(crate) fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.record(format!("get:{key}"));
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        self.record(format!("set:{key}"));
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<(), CacheError> {
        self.record(format!("del:{}", keys.join(",")));
        let mut entries = self.entries.lock().unwrap();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        self.record(format!("scan:{pattern}"));
        let prefix = pattern.strip_suffix('*').unwrap_or(pattern);
        Ok(self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Cache store whose every operation fails.
pub(crate) struct FailingCacheStore;

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::OperationFailed(format!(
            "forced failure getting '{key}'"
        )))
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        Err(CacheError::OperationFailed(format!(
            "forced failure setting '{key}'"
        )))
    }

    async fn delete_keys(&self, _keys: &[String]) -> Result<(), CacheError> {
        Err(CacheError::OperationFailed("forced failure deleting".into()))
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        Err(CacheError::OperationFailed(format!(
            "forced failure scanning '{pattern}'"
        )))
    }
}
