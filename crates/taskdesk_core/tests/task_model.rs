use serde_json::json;
use taskdesk_core::{Priority, Task, TaskStatus, UNTITLED};

#[test]
fn new_task_sets_defaults() {
    let task = Task::new("  Read book ", "Chapter 1", "2025-12-31", Priority::High);

    assert!(!task.id.is_empty());
    assert_eq!(task.title, "Read book");
    assert_eq!(task.description, "Chapter 1");
    assert_eq!(task.due_date, "2025-12-31");
    assert_eq!(task.status, TaskStatus::Active);
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.created_at.len(), "2025-01-01T00:00:00".len());
}

#[test]
fn new_task_ids_are_unique() {
    let a = Task::new("a", "", "", Priority::Medium);
    let b = Task::new("a", "", "", Priority::Medium);
    assert_ne!(a.id, b.id);
}

#[test]
fn new_task_coerces_unknown_priority() {
    let task = Task::new("x", "", "", Priority::from("urgent"));
    assert_eq!(task.priority, Priority::Medium);
}

#[test]
fn record_has_exactly_the_document_keys() {
    let task = Task::new("Ship", "", "", Priority::Low);
    let record = task.to_record();
    let object = record.as_object().unwrap();

    let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["created_at", "description", "due_date", "id", "priority", "status", "title"]
    );
    assert!(object.values().all(|value| value.is_string()));
    assert_eq!(record["status"], "active");
    assert_eq!(record["priority"], "low");
}

#[test]
fn from_record_defaults_missing_keys() {
    let task = Task::from_record(&json!({"title": "A"})).unwrap();

    assert_eq!(task.title, "A");
    assert_eq!(task.description, "");
    assert_eq!(task.due_date, "");
    assert_eq!(task.status, TaskStatus::Active);
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.id.is_empty());
    assert!(!task.created_at.is_empty());
}

#[test]
fn from_record_keeps_unknown_enum_values_verbatim() {
    let record = json!({
        "id": "legacy-1",
        "title": "Old",
        "status": "paused",
        "priority": "urgent",
        "created_at": "2024-05-01T09:30:00"
    });
    let task = Task::from_record(&record).unwrap();

    assert_eq!(task.id, "legacy-1");
    assert_eq!(task.status, TaskStatus::Unknown("paused".to_string()));
    assert_eq!(task.priority, Priority::Unknown("urgent".to_string()));
    assert_eq!(task.to_record()["status"], "paused");
    assert_eq!(task.to_record()["priority"], "urgent");
}

#[test]
fn from_record_normalizes_blank_title() {
    let task = Task::from_record(&json!({"title": "   "})).unwrap();
    assert_eq!(task.title, UNTITLED);

    let task = Task::from_record(&json!({})).unwrap();
    assert_eq!(task.title, UNTITLED);
}

#[test]
fn from_record_rejects_only_non_objects() {
    assert!(Task::from_record(&json!("not-a-record")).is_none());
    assert!(Task::from_record(&json!(42)).is_none());
    assert!(Task::from_record(&json!(null)).is_none());
}

#[test]
fn from_record_defaults_null_and_mistyped_fields() {
    let record = json!({
        "id": 42,
        "title": "Keep me",
        "description": null,
        "due_date": null,
        "status": false,
        "priority": ["high"],
        "created_at": 1700000000
    });
    let task = Task::from_record(&record).unwrap();

    assert_eq!(task.title, "Keep me");
    assert_ne!(task.id, "42");
    assert!(!task.id.is_empty());
    assert_eq!(task.description, "");
    assert_eq!(task.due_date, "");
    assert_eq!(task.status, TaskStatus::Active);
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.created_at.is_empty());

    let task = Task::from_record(&json!({"title": 7})).unwrap();
    assert_eq!(task.title, UNTITLED);
}

#[test]
fn from_record_keeps_non_canonical_case_verbatim() {
    let task = Task::from_record(&json!({
        "id": "t-1",
        "title": "Shouting",
        "status": "DONE",
        "priority": "High"
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::Unknown("DONE".to_string()));
    assert_eq!(task.priority, Priority::Unknown("High".to_string()));
    assert!(!task.is_done());

    let record = task.to_record();
    assert_eq!(record["status"], "DONE");
    assert_eq!(record["priority"], "High");
}
