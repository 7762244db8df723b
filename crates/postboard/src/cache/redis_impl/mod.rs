//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis so a restarted instance
//! starts warm and multiple instances share one cached listing.

mod cache;
mod error;

pub use cache::RedisCache;
