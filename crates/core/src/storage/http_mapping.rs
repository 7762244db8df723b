//! Status-code mapping for storage failures.
//!
//! Returns bare `u16` codes; the server crate owns the `StatusCode`
//! conversion.

use super::StorageError;

/// Chooses the response status for a storage failure.
///
/// `NotFound` answers 404 and `InvalidData` 400; connectivity trouble
/// maps to 503, a timed-out call to 504, and everything else to 500.
///
/// # Examples
///
/// ```
/// use postboard_core::storage::{storage_error_to_status_code, StorageError};
///
/// let err = StorageError::Timeout("find_post timed out after 5000ms".to_string());
/// assert_eq!(storage_error_to_status_code(&err), 504);
/// ```
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::InvalidData(_) => 400,
        StorageError::ConnectionFailed(_) => 503,
        StorageError::Timeout(_) => 504,
        StorageError::QueryFailed(_) => 500,
        StorageError::Serialization(_) => 500,
    }
}
