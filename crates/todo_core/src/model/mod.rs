//! Domain model for the todo store.
//!
//! # Responsibility
//! - Define the record shape shared by storage backends and services.
//!
//! # Invariants
//! - Identity is assigned by storage, never by callers.
//! - Deletion is a hard delete; there are no tombstones.

pub mod todo;
