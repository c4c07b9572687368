//! In-memory user store.
//!
//! All records live in a single `HashMap` keyed by [`UserId`], guarded by one `RwLock`. Lookups
//! take the shared lock; inserts, updates and deletes take the exclusive lock. Guards are
//! released before any method returns, so callers on an async runtime never hold one across an
//! `.await`.
//!
//! `UserStore` is cheap to clone: clones share the same map.

use crate::user::{User, UserFields};
use crate::{UserError, UserResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use users_uuid::UserId;

type Records = HashMap<UserId, User>;

/// Owner of every user record for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct UserStore {
    records: Arc<RwLock<Records>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::StorePoisoned`] if a writer panicked while holding the lock.
    pub fn find_all(&self) -> UserResult<Vec<User>> {
        let records = self.read("find_all")?;
        Ok(records.values().cloned().collect())
    }

    /// Returns the record stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::StorePoisoned`] if a writer panicked while holding the lock.
    pub fn find_by_id(&self, id: &UserId) -> UserResult<Option<User>> {
        let records = self.read("find_by_id")?;
        Ok(records.get(id).cloned())
    }

    /// Stores `fields` under a freshly generated identifier and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::StorePoisoned`] if a writer panicked while holding the lock.
    pub fn insert(&self, fields: UserFields) -> UserResult<User> {
        let mut records = self.write("insert")?;

        let mut id = UserId::new();
        while records.contains_key(&id) {
            id = UserId::new();
        }

        let user = User::from_fields(id, fields);
        records.insert(id, user.clone());
        tracing::debug!("inserted user {}", id);
        Ok(user)
    }

    /// Replaces the record stored under `id` with `fields`.
    ///
    /// The stored record keeps `id`. Returns `None`, leaving the store untouched, if nothing is
    /// stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::StorePoisoned`] if a writer panicked while holding the lock.
    pub fn update(&self, id: &UserId, fields: UserFields) -> UserResult<Option<User>> {
        let mut records = self.write("update")?;

        let Some(slot) = records.get_mut(id) else {
            return Ok(None);
        };
        *slot = User::from_fields(*id, fields);
        Ok(Some(slot.clone()))
    }

    /// Removes the record stored under `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::StorePoisoned`] if a writer panicked while holding the lock.
    pub fn delete(&self, id: &UserId) -> UserResult<Option<User>> {
        let mut records = self.write("delete")?;
        Ok(records.remove(id))
    }

    fn read(&self, operation: &'static str) -> UserResult<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|_| UserError::StorePoisoned { operation })
    }

    fn write(&self, operation: &'static str) -> UserResult<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|_| UserError::StorePoisoned { operation })
    }
}
