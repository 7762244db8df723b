//! PostgreSQL storage backend for users.
//!
//! Implements the user store traits from `postboard_core::storage` using
//! `sqlx`. The users table is created on connect if it does not exist.

mod error;
mod repository;
mod schema;

pub use repository::PgUserStore;
