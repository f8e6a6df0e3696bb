//! In-memory todo storage core.
//! The repository is the single source of truth for stored records.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logs, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, UNSET_TODO_ID};
pub use repo::todo_repo::{MemoryTodoRepository, RepoError, RepoResult, TodoRepository};
pub use service::todo_service::TodoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
