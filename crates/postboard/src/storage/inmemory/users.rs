//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::storage::{Result, UserStore, UserTransaction};
use postboard_core::users::User;

/// Rows plus the id sequence, guarded together so id allocation and the
/// insert happen under one lock.
#[derive(Debug, Default)]
struct UserTable {
    rows: HashMap<i32, User>,
    next_id: i32,
}

impl UserTable {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory user store.
///
/// Rows live in a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe
/// access. Identifiers are sequential starting at 1, like a relational
/// serial column.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    table: Arc<RwLock<UserTable>>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    /// Creates a new empty in-memory user store.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::default())),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let table = self.table.read().await;
        let mut users: Vec<User> = table.rows.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            reposts: 0,
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<Option<User>> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn increment_reposts(&self, id: i32) -> Result<Option<User>> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(user) => {
                user.reposts += 1;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn begin(&self) -> Result<Box<dyn UserTransaction>> {
        Ok(Box::new(InMemoryUserTransaction {
            table: Arc::clone(&self.table),
            staged: Vec::new(),
        }))
    }
}

/// Transaction over the in-memory user store.
///
/// Increments are staged as per-row deltas and applied on commit, so two
/// concurrent transactions bumping the same row both land. Reads inside
/// the transaction see committed state plus its own staged deltas.
struct InMemoryUserTransaction {
    table: Arc<RwLock<UserTable>>,
    staged: Vec<i32>,
}

#[async_trait]
impl UserTransaction for InMemoryUserTransaction {
    async fn increment_reposts(&mut self, id: i32) -> Result<Option<User>> {
        let table = self.table.read().await;
        let Some(row) = table.rows.get(&id) else {
            return Ok(None);
        };
        self.staged.push(id);
        let pending = self.staged.iter().filter(|staged| **staged == id).count() as i32;
        let mut preview = row.clone();
        preview.reposts += pending;
        Ok(Some(preview))
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let Self { table, staged } = *self;
        let mut table = table.write().await;
        for id in staged {
            if let Some(user) = table.rows.get_mut(&id) {
                user.reposts += 1;
            }
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
