//! Byte-level encoding for cached posts listings.
//!
//! Cached values are plain JSON arrays of posts, readable as-is from
//! `redis-cli`.

use crate::posts::Post;
use thiserror::Error;

/// Errors from encoding or decoding a cached listing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The listing could not be encoded to bytes.
    #[error("could not encode cached listing: {0}")]
    SerializeFailed(String),
    /// The cached bytes did not decode to a listing.
    #[error("could not decode cached listing: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Encodes a listing for cache storage.
pub fn serialize_posts(posts: &[Post]) -> Result<Vec<u8>> {
    serde_json::to_vec(posts).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Decodes cache bytes back into a listing.
pub fn deserialize_posts(bytes: &[u8]) -> Result<Vec<Post>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
