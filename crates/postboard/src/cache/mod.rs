//! Cache backend implementations.
//!
//! This module provides concrete implementations of the cache trait
//! defined in `postboard_core::cache`. The backend is selected at
//! startup via [`crate::config::Config`]:
//!
//! - `memory`: In-memory LRU cache for single-instance deployments
//! - `redis`: Redis for shared or persistent caching

pub mod memory;
pub mod redis_impl;
