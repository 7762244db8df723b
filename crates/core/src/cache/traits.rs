use async_trait::async_trait;

use super::Result;

/// Byte-level contract every cache backend implements.
///
/// Entries have no expiry. They leave the cache through explicit
/// deletion or through backend eviction under capacity pressure.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Reads the bytes stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous bytes.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
