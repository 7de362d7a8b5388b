//! Domain model for tasks and UI preferences.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own the wire shape of the task and settings documents.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Tasks are created through `Task::new` or read back from a document,
//!   never assembled field by field by callers.

pub mod settings;
pub mod task;
