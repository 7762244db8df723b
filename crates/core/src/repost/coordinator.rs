//! Cross-store repost coordination.
//!
//! A repost touches both stores: the document store gains a copy of the
//! source post and the relational store gains one repost on the user's
//! counter. Neither store can see the other's transaction, so the
//! coordinator runs a saga: ordered steps, each durable step arming a
//! compensation that is disarmed when a commit supersedes it. On failure
//! the still-armed compensations run in reverse arming order.
//!
//! The two commits cannot be made atomic. The coordinator commits the
//! relational side first; if the document commit then fails, the repost
//! count is durable without the copied post. That gap is deliberate: it
//! is reported as [`RepostError::DocumentCommitFailed`] and logged at
//! ERROR with both identifiers, not papered over with a best-effort
//! decrement that could itself fail.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheGateway, POSTS_LISTING};
use crate::posts::{PostDraft, PostId};
use crate::storage::{PostSession, PostStore, StorageError, UserStore, UserTransaction};

use super::RepostError;

/// Coordinates the repost saga across the document and relational stores.
pub struct RepostCoordinator {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
    cache: CacheGateway,
    op_timeout: Duration,
}

/// Compensations armed by the saga's durable steps.
///
/// A step arms its compensation the moment the underlying resource
/// exists; committing takes the resource back out, which disarms it.
/// `unwind` runs whatever is still armed, in reverse arming order.
#[derive(Default)]
struct Compensations {
    session: Option<Box<dyn PostSession>>,
    transaction: Option<Box<dyn UserTransaction>>,
}

impl Compensations {
    /// Commits the relational transaction, disarming its rollback.
    async fn commit_transaction(&mut self) -> Result<(), StorageError> {
        match self.transaction.take() {
            Some(tx) => tx.commit().await,
            None => Ok(()),
        }
    }

    /// Commits the document session, disarming its abort.
    async fn commit_session(&mut self) -> Result<(), StorageError> {
        match self.session.take() {
            Some(session) => session.commit().await,
            None => Ok(()),
        }
    }

    /// Runs the still-armed compensations in reverse arming order.
    ///
    /// Compensation failures are logged and swallowed; both backends
    /// discard abandoned transactions on their own eventually.
    async fn unwind(&mut self) {
        if let Some(tx) = self.transaction.take() {
            if let Err(err) = tx.rollback().await {
                tracing::warn!(error = %err, "Failed to roll back relational transaction");
            }
        }
        if let Some(session) = self.session.take() {
            if let Err(err) = session.abort().await {
                tracing::warn!(error = %err, "Failed to abort document session");
            }
        }
    }
}

impl RepostCoordinator {
    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        cache: CacheGateway,
        op_timeout: Duration,
    ) -> Self {
        Self {
            posts,
            users,
            cache,
            op_timeout,
        }
    }

    /// Executes the repost protocol for `user_id` and `source_post_id`.
    ///
    /// Steps, in order:
    /// 1. Open a document-store session and fetch the source post through it.
    /// 2. Stage a copy of the post (same fields, fresh identifier) in the session.
    /// 3. Open a relational transaction and increment the user's repost count.
    /// 4. Commit the relational transaction.
    /// 5. Commit the document session.
    /// 6. Invalidate the cached posts listing.
    ///
    /// Every store call runs under the per-call timeout; a timeout is that
    /// call's normal failure outcome. On failure before step 4 nothing is
    /// durable in either store. A failure in step 4 aborts the staged copy
    /// and reports [`RepostError::RelationalCommitFailed`]. A failure in
    /// step 5 reports [`RepostError::DocumentCommitFailed`] with nothing
    /// left to compensate. The cache is only invalidated after step 5.
    pub async fn execute(&self, user_id: i32, source_post_id: &str) -> Result<(), RepostError> {
        let mut armed = Compensations::default();

        match self.run(user_id, source_post_id, &mut armed).await {
            Ok(new_post_id) => {
                self.cache.invalidate(POSTS_LISTING).await;
                tracing::info!(
                    user_id,
                    source_post_id,
                    new_post_id = %new_post_id,
                    "Repost committed"
                );
                Ok(())
            }
            Err(err) => {
                armed.unwind().await;
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        user_id: i32,
        source_post_id: &str,
        armed: &mut Compensations,
    ) -> Result<PostId, RepostError> {
        let session = armed.session.insert(
            self.bounded("open document session", self.posts.begin_session())
                .await?,
        );
        let source = self
            .bounded("load source post", session.find_post(source_post_id))
            .await?
            .ok_or_else(|| RepostError::NotFound {
                id: source_post_id.to_owned(),
            })?;

        let draft = PostDraft::from(source);
        let new_post_id = self
            .bounded("stage post copy", session.stage_create(&draft))
            .await?;

        let tx = armed.transaction.insert(
            self.bounded("open relational transaction", self.users.begin())
                .await?,
        );
        self.bounded("increment repost count", tx.increment_reposts(user_id))
            .await?
            .ok_or(RepostError::ConflictOrNotFound { user_id })?;

        self.bounded(
            "commit relational transaction",
            armed.commit_transaction(),
        )
        .await
        .map_err(|err| RepostError::RelationalCommitFailed(err.to_string()))?;

        if let Err(err) = self
            .bounded("commit document session", armed.commit_session())
            .await
        {
            tracing::error!(
                user_id,
                source_post_id,
                new_post_id = %new_post_id,
                error = %err,
                "Document commit failed after relational commit; repost count is durable without the copied post"
            );
            return Err(RepostError::DocumentCommitFailed(err.to_string()));
        }

        Ok(new_post_id)
    }

    /// Runs one store call under the per-call timeout.
    async fn bounded<T, F>(&self, what: &'static str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::Timeout(format!(
                "{what} timed out after {}ms",
                self.op_timeout.as_millis()
            ))),
        }
    }
}
