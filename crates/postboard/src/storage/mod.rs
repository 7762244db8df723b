//! Storage backend implementations.
//!
//! This module provides concrete implementations of the store traits
//! defined in `postboard_core::storage`. The backend for each store is
//! selected at startup via [`crate::config::Config`]:
//!
//! - Posts: MongoDB (`mongo`) or in-memory (`inmemory`)
//! - Users: PostgreSQL (`postgres`) or in-memory (`inmemory`)
//!
//! The in-memory backends exist for tests and for running the service
//! without any infrastructure behind it.

pub mod inmemory;
pub mod mongo;
pub mod postgres;
