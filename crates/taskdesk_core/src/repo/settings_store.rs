//! Settings store contract and implementations.
//!
//! # Invariants
//! - A missing or malformed document reads as `Settings::default()`; parse
//!   failures are recorded at info level only.
//! - Missing or invalid keys fall back to their own defaults.

use crate::logging::SharedSink;
use crate::model::settings::{AppearanceMode, Settings};
use crate::repo::task_store::{read_document, write_file, StoreError, StoreResult};
use log::Level;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Load/save capability for UI preferences.
pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&mut self, settings: &Settings) -> StoreResult<()>;
}

/// Settings kept as a small JSON object on disk.
pub struct JsonSettingsStore {
    path: PathBuf,
    sink: SharedSink,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>, sink: SharedSink) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Settings {
        match read_document(&self.path, &self.sink, "settings_load", Level::Info) {
            Some(document) => settings_from_value(&document),
            None => Settings::default(),
        }
    }

    fn save(&mut self, settings: &Settings) -> StoreResult<()> {
        let result = serde_json::to_string_pretty(settings)
            .map_err(StoreError::from)
            .and_then(|body| write_file(&self.path, body.as_bytes()));
        match &result {
            Ok(()) => self.sink.info(&format!(
                "event=settings_save module=store status=ok path={} appearance_mode={} autosave={}",
                self.path.display(),
                settings.appearance_mode,
                settings.autosave
            )),
            Err(err) => self.sink.error(&format!(
                "event=settings_save module=store status=error path={} error={}",
                self.path.display(),
                err
            )),
        }
        result
    }
}

/// Settings held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    settings: Settings,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        self.settings
    }

    fn save(&mut self, settings: &Settings) -> StoreResult<()> {
        self.settings = *settings;
        Ok(())
    }
}

/// Key-by-key decode with per-key defaults. Non-objects yield defaults.
fn settings_from_value(document: &Value) -> Settings {
    let defaults = Settings::default();
    let Some(object) = document.as_object() else {
        return defaults;
    };

    let appearance_mode = object
        .get("appearance_mode")
        .and_then(Value::as_str)
        .and_then(AppearanceMode::parse)
        .unwrap_or(defaults.appearance_mode);
    let autosave = object
        .get("autosave")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.autosave);

    Settings {
        appearance_mode,
        autosave,
    }
}

#[cfg(test)]
mod tests {
    use super::settings_from_value;
    use crate::model::settings::{AppearanceMode, Settings};
    use serde_json::json;

    #[test]
    fn decodes_each_key_independently() {
        let settings = settings_from_value(&json!({"appearance_mode": "dark"}));
        assert_eq!(settings.appearance_mode, AppearanceMode::Dark);
        assert!(settings.autosave);

        let settings = settings_from_value(&json!({"appearance_mode": "Sepia", "autosave": false}));
        assert_eq!(settings.appearance_mode, AppearanceMode::System);
        assert!(!settings.autosave);
    }

    #[test]
    fn non_object_documents_yield_defaults() {
        assert_eq!(settings_from_value(&json!([1, 2])), Settings::default());
        assert_eq!(
            settings_from_value(&json!({"autosave": "yes"})),
            Settings::default()
        );
    }
}
