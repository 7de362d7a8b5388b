//! Core logic for TaskDesk, a local task tracker.
//! This crate is the single source of truth for task invariants; front
//! ends talk to it through [`api::TaskDesk`].

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;
pub mod view;

pub use api::{ActionResponse, CreateRequest, EditRequest, TaskDesk};
pub use config::AppPaths;
pub use logging::{
    default_log_level, init_logging, EventSink, LogSink, MemorySink, NullSink, SharedSink,
};
pub use model::settings::{AppearanceMode, Settings};
pub use model::task::{Priority, Task, TaskId, TaskStatus, UNTITLED};
pub use repo::settings_store::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
pub use repo::task_store::{JsonTaskStore, MemoryTaskStore, StoreError, StoreResult, TaskStore};
pub use service::task_service::{NewTask, TaskChanges, TaskService, TaskStats};
pub use validate::{is_partial_due_date, is_valid_due_date};
pub use view::{SortKey, StatusFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
