//! On-disk locations for task data, settings and logs.
//!
//! Resolution order for the data directory: explicit value, then the
//! `TASKDESK_DATA_DIR` environment variable, then `./data`.

use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TASKDESK_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";
const TASKS_FILE_NAME: &str = "tasks.json";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_DIR_NAME: &str = "logs";

/// Resolved file locations. `data_dir` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolves paths from `explicit`, the environment, or the default.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let chosen = explicit
            .map(Path::to_path_buf)
            .or_else(|| {
                std::env::var_os(DATA_DIR_ENV)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::at(chosen)
    }

    /// Paths rooted at `data_dir`, made absolute against the working
    /// directory when relative.
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let data_dir = if data_dir.is_absolute() {
            data_dir
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&data_dir))
                .unwrap_or(data_dir)
        };
        Self { data_dir }
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::AppPaths;
    use std::path::Path;

    #[test]
    fn explicit_dir_wins_and_derives_file_names() {
        let paths = AppPaths::resolve(Some(Path::new("/tmp/taskdesk-explicit")));
        assert_eq!(paths.data_dir, Path::new("/tmp/taskdesk-explicit"));
        assert_eq!(
            paths.tasks_file(),
            Path::new("/tmp/taskdesk-explicit/tasks.json")
        );
        assert_eq!(
            paths.settings_file(),
            Path::new("/tmp/taskdesk-explicit/settings.json")
        );
        assert_eq!(paths.log_dir(), Path::new("/tmp/taskdesk-explicit/logs"));
    }

    #[test]
    fn relative_dir_becomes_absolute() {
        let paths = AppPaths::at("relative-data");
        assert!(paths.data_dir.is_absolute());
        assert!(paths.data_dir.ends_with("relative-data"));
    }
}
