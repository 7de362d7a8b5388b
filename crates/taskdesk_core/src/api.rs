//! Presentation boundary used by front ends.
//!
//! # Responsibility
//! - Expose use-case level entry points (view, create, edit, delete,
//!   mark done, stats, settings) to a UI or CLI.
//! - Validate user input before it reaches the task service.
//! - Apply the session autosave preference to every mutation.
//!
//! # Invariants
//! - Entry points never panic and never return `Err`; failures come back
//!   as `ActionResponse { ok: false, .. }` with a readable reason.
//! - Front ends hold no task state of their own; every mutation goes
//!   through the wrapped `TaskService`.

use crate::config::AppPaths;
use crate::logging::SharedSink;
use crate::model::settings::{AppearanceMode, Settings};
use crate::model::task::{Priority, Task, TaskStatus};
use crate::repo::settings_store::{JsonSettingsStore, SettingsStore};
use crate::repo::task_store::{JsonTaskStore, TaskStore};
use crate::service::task_service::{NewTask, TaskChanges, TaskService, TaskStats};
use crate::validate::parse_due_date;
use crate::view::{self, SortKey, StatusFilter};

/// Raw create-form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    /// `low|medium|high`; anything else is stored as `medium`.
    pub priority: String,
}

/// Raw details-form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    /// `active|done`; anything else is stored as `active`.
    pub status: String,
    pub priority: String,
}

impl From<&Task> for EditRequest {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
        }
    }
}

/// Outcome of a mutating entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Affected task, when there is one.
    pub task_id: Option<String>,
    /// Human-readable result or failure reason.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Session facade over the task service and the settings store.
pub struct TaskDesk<S: TaskStore, C: SettingsStore> {
    service: TaskService<S>,
    settings_store: C,
    settings: Settings,
    sink: SharedSink,
}

impl TaskDesk<JsonTaskStore, JsonSettingsStore> {
    /// Opens the JSON-backed desk under `paths`, seeding example tasks on
    /// first run.
    pub fn open(paths: &AppPaths, sink: SharedSink) -> Self {
        let tasks = JsonTaskStore::new(paths.tasks_file(), sink.clone());
        let settings = JsonSettingsStore::new(paths.settings_file(), sink.clone());
        let mut desk = Self::with_stores(tasks, settings, sink);
        desk.service.seed_if_empty();
        desk
    }
}

impl<S: TaskStore, C: SettingsStore> TaskDesk<S, C> {
    /// Loads settings and tasks from the given stores. Does not seed.
    pub fn with_stores(task_store: S, settings_store: C, sink: SharedSink) -> Self {
        let settings = settings_store.load();
        let mut service = TaskService::new(task_store, sink.clone());
        service.load();
        sink.info(&format!(
            "event=desk_open module=api status=ok appearance_mode={} autosave={}",
            settings.appearance_mode, settings.autosave
        ));
        Self {
            service,
            settings_store,
            settings,
            sink,
        }
    }

    pub fn service(&self) -> &TaskService<S> {
        &self.service
    }

    /// Tasks to display for a status filter and search text, priority first.
    pub fn view(&self, filter: StatusFilter, query: &str) -> Vec<Task> {
        self.view_sorted(filter, query, SortKey::Priority)
    }

    pub fn view_sorted(&self, filter: StatusFilter, query: &str, key: SortKey) -> Vec<Task> {
        let snapshot = self.service.list(filter.status().as_ref());
        view::render_sorted(&snapshot, query, key)
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.service.get(id).cloned()
    }

    pub fn stats(&self) -> TaskStats {
        self.service.stats()
    }

    /// Validates and creates a task.
    pub fn create(&mut self, request: &CreateRequest) -> ActionResponse {
        if let Err(reason) = validate_fields(&request.title, &request.due_date) {
            return self.reject("task_create", reason);
        }

        let new_task = NewTask {
            title: request.title.clone(),
            description: request.description.trim().to_string(),
            due_date: request.due_date.trim().to_string(),
            priority: Priority::from(request.priority.as_str()),
        };
        let task = self.service.add(new_task, self.settings.autosave);
        ActionResponse::success("Task created.", Some(task.id))
    }

    /// Validates and replaces all editable fields of task `id`.
    pub fn edit(&mut self, id: &str, request: &EditRequest) -> ActionResponse {
        if let Err(reason) = validate_fields(&request.title, &request.due_date) {
            return self.reject("task_update", reason);
        }

        let changes = TaskChanges {
            title: request.title.clone(),
            description: request.description.trim().to_string(),
            due_date: request.due_date.trim().to_string(),
            status: TaskStatus::from(request.status.as_str()),
            priority: Priority::from(request.priority.as_str()),
        };
        if self.service.update(id, changes, self.settings.autosave) {
            ActionResponse::success("Task saved.", Some(id.to_string()))
        } else {
            ActionResponse::failure(format!("Task `{id}` not found."))
        }
    }

    /// Deletes task `id` once the user has confirmed.
    pub fn delete(&mut self, id: &str, confirmed: bool) -> ActionResponse {
        if !confirmed {
            return ActionResponse::failure("Deletion not confirmed.");
        }
        if self.service.delete(id, self.settings.autosave) {
            ActionResponse::success("Task deleted.", Some(id.to_string()))
        } else {
            ActionResponse::failure(format!("Task `{id}` not found."))
        }
    }

    pub fn mark_done(&mut self, id: &str) -> ActionResponse {
        if self.service.mark_done(id, self.settings.autosave) {
            ActionResponse::success("Task marked as done.", Some(id.to_string()))
        } else {
            ActionResponse::failure(format!("Task `{id}` not found."))
        }
    }

    /// Explicit save, needed when autosave is off.
    pub fn save(&mut self) -> ActionResponse {
        match self.service.save() {
            Ok(()) => ActionResponse::success("Tasks saved.", None),
            Err(err) => ActionResponse::failure(format!("Saving tasks failed: {err}")),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_appearance_mode(&mut self, mode: AppearanceMode) -> ActionResponse {
        self.settings.appearance_mode = mode;
        self.persist_settings()
    }

    pub fn set_autosave(&mut self, autosave: bool) -> ActionResponse {
        self.settings.autosave = autosave;
        self.persist_settings()
    }

    fn persist_settings(&mut self) -> ActionResponse {
        // The new value stays in effect for the session even if the write fails.
        match self.settings_store.save(&self.settings) {
            Ok(()) => ActionResponse::success("Settings saved.", None),
            Err(err) => ActionResponse::failure(format!("Saving settings failed: {err}")),
        }
    }

    fn reject(&self, event: &str, reason: String) -> ActionResponse {
        self.sink.warn(&format!(
            "event={event} module=api status=error error_code=invalid_input reason={reason}"
        ));
        ActionResponse::failure(reason)
    }
}

/// Checks the fields the service accepts without complaint but a user
/// should not be allowed to submit.
fn validate_fields(title: &str, due_date: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Task title cannot be empty.".to_string());
    }
    parse_due_date(due_date).map(|_| ())
}
