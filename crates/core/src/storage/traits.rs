use async_trait::async_trait;

use crate::posts::{Post, PostDraft, PostId};
use crate::users::User;

use super::Result;

/// Store for post documents.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Gets a post by its identifier. An identifier the store could not
    /// have minted reads as absent.
    async fn find_post(&self, id: &str) -> Result<Option<Post>>;

    /// Gets all posts, in no particular order.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Creates a new post and returns it with its assigned identifier.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post>;

    /// Overwrites the storable fields of an existing post. Returns the
    /// updated post, or `None` if no post has this identifier.
    async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Option<Post>>;

    /// Opens a session whose writes stay invisible until [`PostSession::commit`].
    async fn begin_session(&self) -> Result<Box<dyn PostSession>>;
}

/// A document-store session with an open transaction.
///
/// Reads through the session observe its own staged writes. Nothing
/// becomes durable before `commit`; `abort` discards all staged writes.
/// Both consume the session, so a commit attempt cannot be retried or
/// compensated through the same handle.
#[async_trait]
pub trait PostSession: Send {
    /// Gets a post by its identifier, staged writes included.
    async fn find_post(&mut self, id: &str) -> Result<Option<Post>>;

    /// Stages a new post and returns its assigned identifier.
    async fn stage_create(&mut self, draft: &PostDraft) -> Result<PostId>;

    /// Makes all staged writes durable.
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Discards all staged writes.
    async fn abort(self: Box<Self>) -> Result<()>;
}

/// Store for user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Gets all users ordered by identifier.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a new user with a zero repost count.
    async fn create_user(&self, name: &str, email: &str) -> Result<User>;

    /// Updates a user's name and email. Returns the updated row, or
    /// `None` if no user has this identifier.
    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<Option<User>>;

    /// Increments a user's repost count by one, self-committing. Returns
    /// the updated row, or `None` if no row was affected.
    async fn increment_reposts(&self, id: i32) -> Result<Option<User>>;

    /// Opens a transaction whose writes stay invisible until
    /// [`UserTransaction::commit`].
    async fn begin(&self) -> Result<Box<dyn UserTransaction>>;
}

/// A relational-store transaction.
///
/// `commit` and `rollback` consume the transaction. Implementations must
/// roll back on drop if neither was called.
#[async_trait]
pub trait UserTransaction: Send {
    /// Increments a user's repost count by one within the transaction.
    /// Returns the row as it reads inside the transaction, or `None` if
    /// no row was affected.
    async fn increment_reposts(&mut self, id: i32) -> Result<Option<User>>;

    /// Makes the transaction's writes durable.
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Discards the transaction's writes.
    async fn rollback(self: Box<Self>) -> Result<()>;
}
