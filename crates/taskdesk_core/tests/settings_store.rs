use log::Level;
use std::fs;
use taskdesk_core::{
    AppearanceMode, JsonSettingsStore, MemorySink, NullSink, Settings, SettingsStore,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonSettingsStore {
    JsonSettingsStore::new(dir.path().join("settings.json"), NullSink::shared())
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = store_in(&dir).load();

    assert_eq!(settings.appearance_mode, AppearanceMode::System);
    assert!(settings.autosave);
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let settings = Settings {
        appearance_mode: AppearanceMode::Dark,
        autosave: false,
    };

    store.save(&settings).unwrap();
    assert_eq!(store.load(), settings);

    let body = fs::read_to_string(store.path()).unwrap();
    assert!(body.contains(r#""appearance_mode": "Dark""#));
    assert!(body.contains(r#""autosave": false"#));
}

#[test]
fn malformed_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "appearance_mode = Dark").unwrap();

    assert_eq!(store.load(), Settings::default());
}

#[test]
fn malformed_file_is_not_reported_as_warning() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::new();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonSettingsStore::new(&path, sink.clone());
    assert_eq!(store.load(), Settings::default());

    assert!(sink.contains(Level::Info, "event=settings_load"));
    assert!(sink.contains(Level::Info, "error_code=parse_failed"));
    assert!(sink
        .events()
        .iter()
        .all(|(level, _)| *level > Level::Warn));
}

#[test]
fn partial_document_keeps_present_keys() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"{"autosave": false}"#).unwrap();

    let settings = store.load();
    assert_eq!(settings.appearance_mode, AppearanceMode::System);
    assert!(!settings.autosave);
}

#[test]
fn save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config").join("settings.json");
    let mut store = JsonSettingsStore::new(&path, NullSink::shared());

    store.save(&Settings::default()).unwrap();
    assert!(path.exists());
}
