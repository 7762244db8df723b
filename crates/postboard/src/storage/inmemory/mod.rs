//! In-memory storage backend.
//!
//! This module provides in-memory implementations of the store traits
//! that keep all data in HashMaps wrapped in `Arc<RwLock<_>>`. Useful
//! for tests and for running the service without MongoDB or PostgreSQL
//! behind it.

mod posts;
mod users;

pub use posts::InMemoryPostStore;
pub use users::InMemoryUserStore;
