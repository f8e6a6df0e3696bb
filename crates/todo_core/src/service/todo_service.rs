//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Compose repository calls for small workflows such as completion.
//!
//! # Invariants
//! - The service never bypasses the repository contract.
//! - The service stays storage-agnostic.

use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{RepoResult, TodoRepository};

/// Use-case wrapper around any `TodoRepository` backend.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Builds a new todo from content fields and stores it.
    ///
    /// Returns the stored record with its assigned identity.
    pub fn create_todo(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<Todo> {
        let mut todo = Todo::new(title, description);
        self.repo.create_todo(&mut todo)?;
        Ok(todo)
    }

    pub fn get_todo(&self, id: TodoId) -> RepoResult<Todo> {
        self.repo.get_todo(id)
    }

    pub fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        self.repo.list_todos()
    }

    /// Replaces an existing todo; `NotFound` is passed through unchanged.
    pub fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        self.repo.update_todo(todo)
    }

    pub fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        self.repo.delete_todo(id)
    }

    /// Sets the completion flag of a stored todo.
    ///
    /// # Contract
    /// - Read-modify-write over two repository calls, not one atomic step.
    /// - Returns the record as stored after the update.
    pub fn set_completed(&self, id: TodoId, completed: bool) -> RepoResult<Todo> {
        let mut todo = self.repo.get_todo(id)?;
        todo.set_completed(completed);
        self.repo.update_todo(&todo)?;
        self.repo.get_todo(id)
    }
}
