//! MongoDB storage backend for posts.
//!
//! Implements the post store traits from `postboard_core::storage` using
//! the official `mongodb` driver. Repost sessions map onto MongoDB client
//! sessions with an open transaction, which requires a replica set (or
//! mongos) on the other end.

mod conversions;
mod error;
mod store;

pub use store::MongoPostStore;
