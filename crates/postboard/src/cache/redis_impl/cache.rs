//! Redis cache implementation.
//!
//! The only payload stored today is the serialized posts listing, but the
//! backend is a plain byte cache: GET, SET and DEL on opaque keys. The
//! connection manager reconnects on its own after a dropped connection;
//! operations during the gap fail with `CacheError::ConnectionFailed` and
//! the gateway turns that into a miss.

use async_trait::async_trait;
use redis::AsyncCommands;

use postboard_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache backend over a managed connection.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Opens a managed connection to the Redis server at `url`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the server cannot be
    /// reached while the manager establishes its first connection.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }
}
