//! Task store contract, JSON file store and in-memory store.
//!
//! # Responsibility
//! - Persist and restore whole task snapshots.
//! - Keep file format details inside the persistence boundary.
//!
//! # Invariants
//! - Stores never create, mutate or drop tasks on their own; they only
//!   serialize the snapshot handed to them and read back what is on disk.
//! - `save` overwrites the full document; nothing is appended or patched.
//! - `load` never fails the caller: a missing, unreadable or malformed
//!   document reads as an empty collection.

use crate::logging::SharedSink;
use crate::model::task::Task;
use log::Level;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while writing a document.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Load/save capability over the full task collection.
pub trait TaskStore {
    /// Reads the persisted snapshot in stored order.
    fn load(&self) -> Vec<Task>;
    /// Replaces the persisted snapshot with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> StoreResult<()>;
}

/// Task store backed by one pretty-printed JSON array on disk.
pub struct JsonTaskStore {
    path: PathBuf,
    sink: SharedSink,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>, sink: SharedSink) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, tasks: &[Task]) -> StoreResult<()> {
        let records = tasks.iter().map(Task::to_record).collect::<Vec<_>>();
        let body = serde_json::to_string_pretty(&records)?;
        write_file(&self.path, body.as_bytes())
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> Vec<Task> {
        let Some(document) = read_document(&self.path, &self.sink, "task_load", Level::Warn) else {
            return Vec::new();
        };

        let Value::Array(items) = document else {
            self.sink.warn(&format!(
                "event=task_load module=store status=error error_code=not_an_array path={}",
                self.path.display()
            ));
            return Vec::new();
        };

        let total = items.len();
        let tasks = items
            .iter()
            .filter_map(Task::from_record)
            .collect::<Vec<_>>();
        self.sink.info(&format!(
            "event=task_load module=store status=ok path={} loaded={} skipped={}",
            self.path.display(),
            tasks.len(),
            total - tasks.len()
        ));
        tasks
    }

    fn save(&mut self, tasks: &[Task]) -> StoreResult<()> {
        match self.write_document(tasks) {
            Ok(()) => {
                self.sink.info(&format!(
                    "event=task_save module=store status=ok path={} count={}",
                    self.path.display(),
                    tasks.len()
                ));
                Ok(())
            }
            Err(err) => {
                self.sink.error(&format!(
                    "event=task_save module=store status=error path={} error={}",
                    self.path.display(),
                    err
                ));
                Err(err)
            }
        }
    }
}

/// Task store kept in memory; the substitute for the file store in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    saves: usize,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose next `load` returns `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, saves: 0 }
    }

    /// Last saved snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn save(&mut self, tasks: &[Task]) -> StoreResult<()> {
        self.tasks = tasks.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// Reads and parses a JSON document.
///
/// `None` when the file is missing or cannot be read or parsed. Read and
/// parse failures are logged under `event` at `failure_level`.
pub(crate) fn read_document(
    path: &Path,
    sink: &SharedSink,
    event: &str,
    failure_level: Level,
) -> Option<Value> {
    if !path.exists() {
        sink.info(&format!(
            "event={event} module=store status=ok path={} reason=missing_file",
            path.display()
        ));
        return None;
    }

    let body = match std::fs::read_to_string(path) {
        Ok(body) => body,
        Err(err) => {
            let line = format!(
                "event={event} module=store status=error error_code=read_failed path={} error={}",
                path.display(),
                err
            );
            sink.emit(failure_level, &line);
            return None;
        }
    };

    match serde_json::from_str(&body) {
        Ok(value) => Some(value),
        Err(err) => {
            let line = format!(
                "event={event} module=store status=error error_code=parse_failed path={} error={}",
                path.display(),
                err
            );
            sink.emit(failure_level, &line);
            None
        }
    }
}

/// Writes `body` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, body: &[u8]) -> StoreResult<()> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, body).map_err(io_error)
}
