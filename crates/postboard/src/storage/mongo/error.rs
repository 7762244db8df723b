//! MongoDB error mapping.
//!
//! Maps driver errors to `StorageError` from `postboard_core::storage`.

use mongodb::error::{Error, ErrorKind};
use postboard_core::storage::StorageError;

/// Map a driver error to StorageError.
pub fn map_mongo_error(err: Error) -> StorageError {
    match &*err.kind {
        ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => {
            StorageError::ConnectionFailed(err.to_string())
        }
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::Serialization(err.to_string())
        }
        _ => StorageError::QueryFailed(err.to_string()),
    }
}
