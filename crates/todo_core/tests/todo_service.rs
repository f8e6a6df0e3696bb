use chrono::{Duration, Utc};
use std::sync::Arc;
use todo_core::{MemoryTodoRepository, RepoError, TodoRepository, TodoService};

#[test]
fn create_todo_returns_stored_record() {
    let service = TodoService::new(MemoryTodoRepository::new());

    let todo = service.create_todo("pay rent", "before the 5th").unwrap();
    assert_eq!(todo.id, 1);
    assert!(!todo.completed);
    assert_eq!(service.get_todo(todo.id).unwrap(), todo);
}

#[test]
fn set_completed_persists_flag_and_refreshes_timestamp() {
    let service = TodoService::new(MemoryTodoRepository::new());
    let todo = service.create_todo("water plants", "").unwrap();
    let before_complete = Utc::now();

    let done = service.set_completed(todo.id, true).unwrap();
    assert!(done.completed);
    assert!(done.updated_at >= before_complete);
    assert_eq!(done.created_at, todo.created_at);

    let reopened = service.set_completed(todo.id, false).unwrap();
    assert!(!reopened.completed);
}

#[test]
fn set_completed_on_missing_id_returns_not_found() {
    let service = TodoService::new(MemoryTodoRepository::new());
    assert_eq!(
        service.set_completed(4, true).unwrap_err(),
        RepoError::NotFound(4)
    );
    assert!(service.list_todos().unwrap().is_empty());
}

#[test]
fn update_and_delete_pass_through() {
    let service = TodoService::new(MemoryTodoRepository::new());
    let mut todo = service.create_todo("draft", "").unwrap();

    todo.title = "final".to_string();
    let stale = todo.created_at - Duration::hours(6);
    todo.updated_at = stale;
    service.update_todo(&todo).unwrap();

    let loaded = service.get_todo(todo.id).unwrap();
    assert_eq!(loaded.title, "final");
    assert_ne!(loaded.updated_at, stale);
    assert!(loaded.updated_at >= loaded.created_at);

    service.delete_todo(todo.id).unwrap();
    assert_eq!(
        service.delete_todo(todo.id).unwrap_err(),
        RepoError::NotFound(todo.id)
    );
}

#[test]
fn service_accepts_shared_repository_handle() {
    let repo = Arc::new(MemoryTodoRepository::new());
    let service = TodoService::new(Arc::clone(&repo));

    service.create_todo("shared", "").unwrap();
    assert_eq!(repo.list_todos().unwrap().len(), 1);
    assert_eq!(service.repository().len(), 1);
}
