use thiserror::Error;

/// Failure taxonomy shared by every store backend.
///
/// Backends map their driver errors onto these variants; the HTTP layer
/// maps the variants onto status codes. `Display` text ends up in
/// response bodies, so it names the entity rather than the driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity_type} {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("storage connection failed: {0}")]
    ConnectionFailed(String),
    #[error("storage query failed: {0}")]
    QueryFailed(String),
    #[error("storage serialization failed: {0}")]
    Serialization(String),
    #[error("malformed storage data: {0}")]
    InvalidData(String),
    #[error("storage timeout: {0}")]
    Timeout(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
