//! Application state with store-backed trait objects.
//!
//! Every request handler clones one [`AppState`]. Backends are chosen at
//! startup from [`Config`] rather than at compile time, so one binary
//! serves development (all in-memory) and production (MongoDB +
//! PostgreSQL + Redis) alike.

use std::sync::Arc;

use postboard_core::cache::{Cache, CacheGateway};
use postboard_core::listing::PostListing;
use postboard_core::repost::RepostCoordinator;
use postboard_core::storage::{PostStore, UserStore};

use crate::cache::memory::MemoryCache;
use crate::cache::redis_impl::RedisCache;
use crate::config::{CacheBackend, Config, PostBackend, UserBackend};
use crate::storage::inmemory::{InMemoryPostStore, InMemoryUserStore};
use crate::storage::mongo::MongoPostStore;
use crate::storage::postgres::PgUserStore;

/// Store trait objects plus the two cross-store components built on
/// top of them.
#[derive(Clone)]
pub struct AppState {
    /// Post store (document-oriented backend).
    pub posts: Arc<dyn PostStore>,
    /// User store (relational backend).
    pub users: Arc<dyn UserStore>,
    /// Failure-swallowing handle to the cache backend.
    pub cache: CacheGateway,
    /// Cache-aside read path for the posts listing.
    pub listing: Arc<PostListing>,
    /// Coordinator for the cross-store repost protocol.
    pub repost: Arc<RepostCoordinator>,
}

impl AppState {
    /// Connects the configured backends and assembles the state.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let posts: Arc<dyn PostStore> = match config.post_backend {
            PostBackend::Mongo => {
                Arc::new(MongoPostStore::connect(&config.mongo_url, &config.mongo_database).await?)
            }
            PostBackend::InMemory => Arc::new(InMemoryPostStore::new()),
        };

        let users: Arc<dyn UserStore> = match config.user_backend {
            UserBackend::Postgres => Arc::new(PgUserStore::connect(&config.postgres_url).await?),
            UserBackend::InMemory => Arc::new(InMemoryUserStore::new()),
        };

        let cache: Arc<dyn Cache> = match config.cache_backend {
            CacheBackend::Redis => Arc::new(RedisCache::new(&config.redis_url).await?),
            CacheBackend::Memory => Arc::new(MemoryCache::new(config.cache_max_entries)),
        };

        Ok(Self::build(posts, users, cache, config))
    }

    /// Assembles the state from already-connected backends.
    fn build(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        cache: Arc<dyn Cache>,
        config: &Config,
    ) -> Self {
        let cache = CacheGateway::new(cache);
        let listing = Arc::new(PostListing::new(posts.clone(), cache.clone()));
        let repost = Arc::new(RepostCoordinator::new(
            posts.clone(),
            users.clone(),
            cache.clone(),
            config.operation_timeout(),
        ));

        Self {
            posts,
            users,
            cache,
            listing,
            repost,
        }
    }
}
