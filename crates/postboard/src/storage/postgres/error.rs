//! PostgreSQL error mapping.
//!
//! Maps sqlx errors to `StorageError` from `postboard_core::storage`.

use postboard_core::storage::StorageError;

/// Map an sqlx error to StorageError.
pub fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StorageError::ConnectionFailed(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => StorageError::Serialization(err.to_string()),
        _ => StorageError::QueryFailed(err.to_string()),
    }
}
