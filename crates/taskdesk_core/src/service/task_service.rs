//! Task use-case service.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection.
//! - Provide create/read/update/delete/mark-done entry points.
//! - Delegate durability to a `TaskStore`.
//!
//! # Invariants
//! - Collection order is insertion order and survives load/save.
//! - Title and priority are normalized on every create/update.
//! - A failed save never rolls back the in-memory mutation; memory is the
//!   truth for the rest of the session.
//! - Not-found is a plain `false`/`None`, never an error.

use crate::logging::SharedSink;
use crate::model::task::{normalize_title, Priority, Task, TaskId, TaskStatus};
use crate::repo::task_store::{StoreResult, TaskStore};

/// Example tasks inserted on first run: `(title, description, due_date, priority)`.
const SEED_TASKS: [(&str, &str, &str, Priority); 3] = [
    ("Buy groceries", "Milk, bread, eggs", "2025-01-10", Priority::Medium),
    ("Finish coursework", "UI + JSON + logs", "2025-02-01", Priority::High),
    ("Take a walk", "30 minutes in the evening", "", Priority::Low),
];

/// Input for `TaskService::add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` or empty. Not re-validated here.
    pub due_date: String,
    /// Unknown values are stored as `Priority::Medium`.
    pub priority: Priority,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Full replacement of a task's editable fields for `TaskService::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
    pub due_date: String,
    /// Unknown values are stored as `TaskStatus::Active`.
    pub status: TaskStatus,
    /// Unknown values are stored as `Priority::Medium`.
    pub priority: Priority,
}

impl From<&Task> for TaskChanges {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            status: task.status.clone(),
            priority: task.priority.clone(),
        }
    }
}

/// Aggregate counts over the current collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub done: usize,
}

/// In-memory task collection backed by a store.
pub struct TaskService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    sink: SharedSink,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates an empty service. Call `load` to read the store.
    pub fn new(store: S, sink: SharedSink) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            sink,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the in-memory collection with the store's snapshot.
    pub fn load(&mut self) {
        self.tasks = self.store.load();
        self.sink.info(&format!(
            "event=service_load module=service status=ok count={}",
            self.tasks.len()
        ));
    }

    /// Writes the full collection to the store.
    ///
    /// The store logs failures; the error is returned for callers that
    /// want to tell the user.
    pub fn save(&mut self) -> StoreResult<()> {
        self.store.save(&self.tasks)
    }

    /// Inserts the example tasks when the collection is empty and persists
    /// once. Returns whether anything was inserted.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.tasks.is_empty() {
            return false;
        }
        for (title, description, due_date, priority) in SEED_TASKS {
            self.tasks
                .push(Task::new(title, description, due_date, priority));
        }
        self.sink.info(&format!(
            "event=task_seed module=service status=ok count={}",
            self.tasks.len()
        ));
        self.persist("task_seed");
        true
    }

    /// Creates a task at the end of the collection.
    pub fn add(&mut self, new_task: NewTask, autosave: bool) -> Task {
        let task = Task::new(
            &new_task.title,
            new_task.description,
            new_task.due_date,
            new_task.priority,
        );
        self.tasks.push(task.clone());
        self.sink.info(&format!(
            "event=task_create module=service status=ok task_id={} priority={}",
            task.id, task.priority
        ));
        if autosave {
            self.persist("task_create");
        }
        task
    }

    /// Copy of the collection, optionally only tasks with `status`.
    pub fn list(&self, status: Option<&TaskStatus>) -> Vec<Task> {
        match status {
            None => self.tasks.clone(),
            Some(status) => self
                .tasks
                .iter()
                .filter(|task| &task.status == status)
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Overwrites every editable field of task `id`.
    ///
    /// Returns `false` when no such task exists.
    pub fn update(&mut self, id: &str, changes: TaskChanges, autosave: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn_not_found(&self.sink, "task_update", id);
            return false;
        };

        task.title = normalize_title(&changes.title);
        task.description = changes.description;
        task.due_date = changes.due_date;
        task.status = changes.status.normalized();
        task.priority = changes.priority.normalized();
        let line = format!(
            "event=task_update module=service status=ok task_id={} task_status={} priority={}",
            task.id, task.status, task.priority
        );
        self.sink.info(&line);

        if autosave {
            self.persist("task_update");
        }
        true
    }

    /// Removes task `id`. Persists only if something was removed.
    pub fn delete(&mut self, id: &str, autosave: bool) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            warn_not_found(&self.sink, "task_delete", id);
            return false;
        };

        let removed: TaskId = self.tasks.remove(index).id;
        self.sink.info(&format!(
            "event=task_delete module=service status=ok task_id={removed}"
        ));
        if autosave {
            self.persist("task_delete");
        }
        true
    }

    /// Sets task `id` to done. Returns `false` when no such task exists.
    pub fn mark_done(&mut self, id: &str, autosave: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn_not_found(&self.sink, "task_mark_done", id);
            return false;
        };

        task.status = TaskStatus::Done;
        let line = format!(
            "event=task_mark_done module=service status=ok task_id={}",
            task.id
        );
        self.sink.info(&line);

        if autosave {
            self.persist("task_mark_done");
        }
        true
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let done = self.tasks.iter().filter(|task| task.is_done()).count();
        TaskStats {
            total,
            active: total - done,
            done,
        }
    }

    fn persist(&mut self, event: &str) {
        if let Err(err) = self.store.save(&self.tasks) {
            self.sink.warn(&format!(
                "event={event} module=service status=error error_code=autosave_failed error={err}"
            ));
        }
    }
}

fn warn_not_found(sink: &SharedSink, event: &str, id: &str) {
    sink.warn(&format!(
        "event={event} module=service status=error error_code=not_found task_id={id}"
    ));
}
