//! User domain types.

use serde::{Deserialize, Serialize};

/// A user row in the relational store.
///
/// `reposts` counts how many reposts the user has performed. It starts at
/// zero and only ever grows through increments, so it never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub reposts: i32,
}
