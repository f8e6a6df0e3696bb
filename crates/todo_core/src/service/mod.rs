//! Use-case services over repository contracts.
//!
//! # Responsibility
//! - Give callers task-shaped entry points without exposing storage details.

pub mod todo_service;
