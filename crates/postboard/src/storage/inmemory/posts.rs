//! In-memory post store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postboard_core::posts::{Post, PostDraft, PostId};
use postboard_core::storage::{PostSession, PostStore, Result};

/// In-memory post store.
///
/// Posts live in a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe
/// access. Data is not persisted and will be lost when the store is
/// dropped. Identifiers are random UUIDs.
#[derive(Debug, Clone)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostStore {
    /// Creates a new empty in-memory post store.
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_post(&self, id: &str) -> Result<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let post = Post::from_draft(Uuid::new_v4().to_string(), draft.clone());
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Option<Post>> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(id) {
            Some(post) => {
                *post = Post::from_draft(id.to_string(), draft.clone());
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn begin_session(&self) -> Result<Box<dyn PostSession>> {
        Ok(Box::new(InMemoryPostSession {
            posts: Arc::clone(&self.posts),
            staged: Vec::new(),
        }))
    }
}

/// Session over the in-memory post store.
///
/// Staged posts are buffered locally and only enter the shared map on
/// commit, so other callers never observe half of a session.
struct InMemoryPostSession {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
    staged: Vec<Post>,
}

#[async_trait]
impl PostSession for InMemoryPostSession {
    async fn find_post(&mut self, id: &str) -> Result<Option<Post>> {
        if let Some(post) = self.staged.iter().find(|post| post.id == id) {
            return Ok(Some(post.clone()));
        }
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn stage_create(&mut self, draft: &PostDraft) -> Result<PostId> {
        let post = Post::from_draft(Uuid::new_v4().to_string(), draft.clone());
        let id = post.id.clone();
        self.staged.push(post);
        Ok(id)
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let Self { posts, staged } = *self;
        let mut posts = posts.write().await;
        for post in staged {
            posts.insert(post.id.clone(), post);
        }
        Ok(())
    }

    async fn abort(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
