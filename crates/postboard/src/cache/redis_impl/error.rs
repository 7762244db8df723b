//! Classifies Redis failures for the cache error taxonomy.

use postboard_core::cache::CacheError;

/// Sorts a Redis failure into connectivity trouble vs a command fault.
///
/// Refused, dropped, and timed-out connections become `ConnectionFailed`;
/// everything else becomes `OperationFailed`.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    let unreachable =
        err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped();
    if unreachable {
        return CacheError::ConnectionFailed(err.to_string());
    }
    CacheError::OperationFailed(err.to_string())
}
