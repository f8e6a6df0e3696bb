//! Todo repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the five-operation CRUD contract every storage backend offers.
//! - Provide the process-local backend used by default.
//!
//! # Invariants
//! - Identities start at 1, grow by one per create and are never reused.
//! - The id counter and the record map change under one write lock.
//! - Reads hand out owned copies; callers cannot alias stored records.
//! - A call that fails with `NotFound` leaves the store untouched.

use crate::model::todo::{Todo, TodoId};
use chrono::Utc;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const FIRST_TODO_ID: TodoId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Domain error for todo storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    /// No record is stored under the given identity.
    NotFound(TodoId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for todo records.
///
/// Backends must be safe to call from many threads at once; writers are
/// exclusive, readers may overlap each other.
pub trait TodoRepository {
    /// Assigns the next identity to `todo`, stores a copy and returns the id.
    fn create_todo(&self, todo: &mut Todo) -> RepoResult<TodoId>;
    /// Returns a copy of the record stored under `id`.
    fn get_todo(&self, id: TodoId) -> RepoResult<Todo>;
    /// Returns copies of every stored record. Order is not part of the contract.
    fn list_todos(&self) -> RepoResult<Vec<Todo>>;
    /// Replaces the record stored under `todo.id`.
    fn update_todo(&self, todo: &Todo) -> RepoResult<()>;
    /// Removes the record stored under `id`.
    fn delete_todo(&self, id: TodoId) -> RepoResult<()>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Arc<R> {
    fn create_todo(&self, todo: &mut Todo) -> RepoResult<TodoId> {
        (**self).create_todo(todo)
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Todo> {
        (**self).get_todo(id)
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        (**self).list_todos()
    }

    fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        (**self).update_todo(todo)
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        (**self).delete_todo(id)
    }
}

impl<R: TodoRepository + ?Sized> TodoRepository for Box<R> {
    fn create_todo(&self, todo: &mut Todo) -> RepoResult<TodoId> {
        (**self).create_todo(todo)
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Todo> {
        (**self).get_todo(id)
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        (**self).list_todos()
    }

    fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        (**self).update_todo(todo)
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        (**self).delete_todo(id)
    }
}

struct TodoTable {
    todos: HashMap<TodoId, Todo>,
    /// Only ever incremented by one per create. An in-process store cannot
    /// reach `TodoId::MAX` creates, so the increment never overflows.
    next_id: TodoId,
}

/// In-memory todo repository guarded by a single reader/writer lock.
///
/// State lives only in process memory and is dropped with the repository.
pub struct MemoryTodoRepository {
    table: RwLock<TodoTable>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-sizes the record map for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: RwLock::new(TodoTable {
                todos: HashMap::with_capacity(capacity),
                next_id: FIRST_TODO_ID,
            }),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.table.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().todos.is_empty()
    }
}

impl Default for MemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn create_todo(&self, todo: &mut Todo) -> RepoResult<TodoId> {
        let mut table = self.table.write();

        let id = table.next_id;
        table.next_id += 1;
        todo.id = id;
        table.todos.insert(id, todo.clone());
        drop(table);

        debug!("event=todo_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Todo> {
        let table = self.table.read();
        match table.todos.get(&id) {
            Some(todo) => Ok(todo.clone()),
            None => {
                debug!("event=todo_get module=repo status=not_found id={id}");
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        let mut todos: Vec<Todo> = self.table.read().todos.values().cloned().collect();
        todos.sort_unstable_by_key(|todo| todo.id);

        debug!("event=todo_list module=repo status=ok count={}", todos.len());
        Ok(todos)
    }

    fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        let id = todo.id;
        let mut table = self.table.write();

        let Some(stored) = table.todos.get_mut(&id) else {
            debug!("event=todo_update module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        let created_at = stored.created_at;
        *stored = Todo {
            created_at,
            updated_at: Utc::now().max(created_at),
            ..todo.clone()
        };

        debug!("event=todo_update module=repo status=ok id={id}");
        Ok(())
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        let removed = self.table.write().todos.remove(&id);
        if removed.is_none() {
            debug!("event=todo_delete module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        }

        debug!("event=todo_delete module=repo status=ok id={id}");
        Ok(())
    }
}
