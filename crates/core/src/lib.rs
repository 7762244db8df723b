//! Store-agnostic core for the postboard service.
//!
//! This crate holds the domain types, the storage and cache traits the
//! server binary implements against real backends, and the two pieces of
//! cross-store logic: the cache-aside posts listing and the repost
//! coordinator that spans the document and relational stores.

pub mod cache;
pub mod listing;
pub mod posts;
pub mod repost;
pub mod storage;
pub mod users;
