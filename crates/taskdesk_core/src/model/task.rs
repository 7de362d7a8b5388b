//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by service, stores and views.
//! - Convert tasks to and from the flat JSON record used on disk.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never empty once normalized.
//! - Unknown `status` / `priority` strings read from disk are kept verbatim.

use chrono::Local;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Title substituted for blank input.
pub const UNTITLED: &str = "Untitled";

/// Format of `created_at` (local time, second granularity).
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Opaque task identifier. Generated ids are UUID v4 text, loaded ids are
/// taken as-is.
pub type TaskId = String;

/// Task completion state.
///
/// `Unknown` keeps whatever string a task document carried so that a
/// load/save cycle does not rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Active,
    Done,
    Unknown(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Done => "done",
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    /// Maps unknown values to the default state.
    pub fn normalized(self) -> Self {
        match self {
            Self::Unknown(_) => Self::default(),
            known => known,
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "done" => Self::Done,
            _ => Self::Unknown(value.to_string()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Task urgency. Unknown values rank as `Medium` in views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Unknown(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    /// Sort weight: high 3, medium 2, low 1, unknown counts as medium.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium | Self::Unknown(_) => 2,
            Self::Low => 1,
        }
    }

    /// Maps unknown values to the default priority.
    pub fn normalized(self) -> Self {
        match self {
            Self::Unknown(_) => Self::default(),
            known => known,
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown(value.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One unit of work.
///
/// Field order is the wire order of the task document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` or empty for "no due date".
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub created_at: String,
}

impl Task {
    /// Creates an active task with a fresh id and creation timestamp.
    ///
    /// Title and priority are normalized; description and due date are
    /// stored as given.
    pub fn new(
        title: &str,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: generate_task_id(),
            title: normalize_title(title),
            description: description.into(),
            due_date: due_date.into(),
            status: TaskStatus::Active,
            priority: priority.normalized(),
            created_at: created_at_now(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Flat JSON record with exactly the document keys.
    pub fn to_record(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "due_date": self.due_date,
            "status": self.status.as_str(),
            "priority": self.priority.as_str(),
            "created_at": self.created_at,
        })
    }

    /// Builds a task from one document record.
    ///
    /// Returns `None` only for values that are not objects. Each key is read
    /// on its own: a missing, `null` or non-string value takes that key's
    /// default, and a blank title becomes [`UNTITLED`].
    pub fn from_record(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            id: text_field(object, "id").unwrap_or_else(generate_task_id),
            title: normalize_title(&text_field(object, "title").unwrap_or_default()),
            description: text_field(object, "description").unwrap_or_default(),
            due_date: text_field(object, "due_date").unwrap_or_default(),
            status: text_field(object, "status")
                .map(TaskStatus::from)
                .unwrap_or_default(),
            priority: text_field(object, "priority")
                .map(Priority::from)
                .unwrap_or_default(),
            created_at: text_field(object, "created_at").unwrap_or_else(created_at_now),
        })
    }
}

/// Trims the title and substitutes [`UNTITLED`] when nothing is left.
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn generate_task_id() -> TaskId {
    Uuid::new_v4().to_string()
}

fn created_at_now() -> String {
    Local::now().format(CREATED_AT_FORMAT).to_string()
}
