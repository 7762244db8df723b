use thiserror::Error;

/// Errors reported by cache backends.
///
/// The gateway logs these and degrades to a miss, so they never reach
/// request handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backend could not be reached.
    #[error("cache backend unreachable: {0}")]
    ConnectionFailed(String),
    /// The backend accepted the connection but the command failed.
    #[error("cache command failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
