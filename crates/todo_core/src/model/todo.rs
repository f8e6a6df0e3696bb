//! Todo record.
//!
//! # Responsibility
//! - Define the unit of storage and its construction defaults.
//!
//! # Invariants
//! - `id == UNSET_TODO_ID` until a repository stores the record.
//! - `created_at` is fixed at construction.
//! - `updated_at >= created_at` for records produced by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer identity assigned by the store, starting at 1.
pub type TodoId = u64;

/// Identity carried by a record that has not been stored yet.
pub const UNSET_TODO_ID: TodoId = 0;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identity; `UNSET_TODO_ID` before creation.
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed by the repository on every successful update.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates an unstored, incomplete todo stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UNSET_TODO_ID,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether a repository has assigned this record an identity.
    pub fn is_stored(&self) -> bool {
        self.id != UNSET_TODO_ID
    }

    /// Sets the completion flag. Timestamps are left to the repository.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
