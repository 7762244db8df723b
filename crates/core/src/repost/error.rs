use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while coordinating a repost across stores.
///
/// `DocumentCommitFailed` is the one outcome that leaves the stores
/// inconsistent: the repost count is already durable, the copied post is
/// not. There is no compensation for it; the coordinator reports it and
/// logs enough detail to reconcile by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepostError {
    /// The source post does not exist.
    #[error("Post not found: {id}")]
    NotFound { id: String },
    /// The repost-count increment matched no user row. With the increment
    /// expressed as a single UPDATE there is no way to tell a missing row
    /// from a row that vanished mid-flight, hence the combined name.
    #[error("Repost count update affected no rows for user {user_id}")]
    ConflictOrNotFound { user_id: i32 },
    /// The relational commit failed; the staged post copy was aborted.
    #[error("Relational commit failed: {0}")]
    RelationalCommitFailed(String),
    /// The document commit failed after the relational commit succeeded.
    #[error("Document commit failed after relational commit: {0}")]
    DocumentCommitFailed(String),
    /// A store call failed before any commit was attempted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
