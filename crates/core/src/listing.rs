//! Cache-aside read path for the posts listing.
//!
//! - **Reads**: check the cache first; on miss fetch from the post store
//!   and populate the cache with the serialized listing.
//! - **Writes**: post mutations invalidate the listing key through
//!   [`CacheGateway::invalidate`] after they commit, never before.

use std::sync::Arc;

use crate::cache::{deserialize_posts, serialize_posts, CacheGateway, POSTS_LISTING};
use crate::posts::Post;
use crate::storage::{PostStore, Result};

/// Serves the full posts listing through the cache.
///
/// The cache is advisory: any failure to read, decode or populate it is
/// logged and the listing is served from the store instead.
pub struct PostListing {
    posts: Arc<dyn PostStore>,
    cache: CacheGateway,
}

impl PostListing {
    pub fn new(posts: Arc<dyn PostStore>, cache: CacheGateway) -> Self {
        Self { posts, cache }
    }

    /// Returns all posts, preferring the cached listing.
    pub async fn get(&self) -> Result<Vec<Post>> {
        if let Some(bytes) = self.cache.get(POSTS_LISTING).await {
            match deserialize_posts(&bytes) {
                Ok(posts) => {
                    tracing::trace!(count = posts.len(), "Cache hit for posts listing");
                    return Ok(posts);
                }
                // Deserialization failed - treat as cache miss
                Err(err) => {
                    tracing::warn!(error = %err, "Cached posts listing failed to decode")
                }
            }
        }

        tracing::trace!("Cache miss for posts listing");
        let posts = self.posts.list_posts().await?;

        match serialize_posts(&posts) {
            Ok(bytes) => self.cache.set(POSTS_LISTING, &bytes).await,
            Err(err) => tracing::warn!(error = %err, "Failed to encode posts listing for cache"),
        }

        Ok(posts)
    }
}
