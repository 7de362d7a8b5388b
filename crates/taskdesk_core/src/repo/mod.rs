//! Persistence contracts and document-backed implementations.
//!
//! # Responsibility
//! - Define load/save contracts for tasks and settings.
//! - Isolate file format and I/O details from service orchestration.
//!
//! # Invariants
//! - Read faults degrade to empty/default state, never to an error.
//! - Write faults are logged and returned; callers decide whether they
//!   matter.

pub mod settings_store;
pub mod task_store;
