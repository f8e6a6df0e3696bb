use log::LevelFilter;
use std::path::Path;
use todo_core::{
    flush_logs, init_logging, logging_status, MemoryTodoRepository, RepoError, Todo,
    TodoRepository,
};

fn read_logs(dir: &Path) -> String {
    let mut text = String::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            text.push_str(&std::fs::read_to_string(path).unwrap());
        }
    }
    text
}

// One test per binary: the store log is process-wide.
#[test]
fn repository_events_reach_the_store_log() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();

    assert!(init_logging("loud", dir.path()).is_err());
    assert!(init_logging("debug", "relative/logs").is_err());
    assert!(logging_status().is_none());

    init_logging("debug", dir.path()).unwrap();
    init_logging(" DEBUG ", dir.path()).unwrap();
    assert!(init_logging("info", dir.path()).is_err());
    assert!(init_logging("debug", other.path()).is_err());
    assert_eq!(
        logging_status(),
        Some((LevelFilter::Debug, dir.path().to_path_buf()))
    );

    let repo = MemoryTodoRepository::new();
    let mut todo = Todo::new("secret title", "secret body");
    let id = repo.create_todo(&mut todo).unwrap();
    repo.delete_todo(id).unwrap();
    assert_eq!(repo.delete_todo(id).unwrap_err(), RepoError::NotFound(id));
    flush_logs();

    let logs = read_logs(dir.path());
    assert!(logs.contains("event=store_log_init module=core status=ok backend=memory"));
    assert!(logs.contains(&format!("event=todo_create module=repo status=ok id={id}")));
    assert!(logs.contains(&format!("event=todo_delete module=repo status=not_found id={id}")));
    assert!(!logs.contains("secret"));
}
