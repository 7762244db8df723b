//! Best-effort access to the cache backend.
//!
//! The cache is advisory: a broken or unreachable backend must never fail
//! a request. Every error from the underlying [`Cache`] is logged at WARN
//! and then swallowed, so callers see a miss instead of a failure.

use std::sync::Arc;

use super::Cache;

/// Shared, failure-swallowing handle to the cache backend.
#[derive(Clone)]
pub struct CacheGateway {
    cache: Arc<dyn Cache>,
}

impl CacheGateway {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Gets the cached payload for a key, treating backend failure as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Writes a payload under a key. Failures are logged and dropped.
    pub async fn set(&self, key: &str, value: &[u8]) {
        if let Err(err) = self.cache.set(key, value).await {
            tracing::warn!(key, error = %err, "Failed to write cache entry");
        }
    }

    /// Deletes a key. Failures are logged and dropped.
    pub async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Failed to invalidate cache entry");
        }
    }
}
