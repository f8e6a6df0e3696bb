//! Repository layer: storage contracts and backends.
//!
//! # Responsibility
//! - Define the CRUD contract callers program against.
//! - Keep locking and identity assignment inside the storage boundary.
//!
//! # Invariants
//! - `NotFound` is the only domain error a repository reports.

pub mod todo_repo;
