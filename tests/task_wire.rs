use taskpad::backend::wire::{parse_task, parse_task_list, CreateTaskBody, UpdateTaskBody};
use taskpad::backend::{BackendError, CreateTaskArgs, UpdateTaskArgs};
use taskpad::constants::NEW_TASK_DESCRIPTION;

#[test]
fn test_is_active_takes_precedence() {
    let task = parse_task(r#"{"id":"1","name":"A","description":"d","isActive":false,"active":true}"#).unwrap();
    assert!(!task.active);
}

#[test]
fn test_falls_back_to_active_then_true() {
    let task = parse_task(r#"{"id":"1","name":"A","active":false}"#).unwrap();
    assert!(!task.active);

    let task = parse_task(r#"{"id":"1","name":"A"}"#).unwrap();
    assert!(task.active);
}

#[test]
fn test_numeric_id_and_missing_fields() {
    let task = parse_task(r#"{"id":7,"name":"Sete"}"#).unwrap();
    assert_eq!(task.id, "7");
    assert_eq!(task.description, "");
    assert!(task.created_at.is_none());
    assert!(task.updated_at.is_none());
}

#[test]
fn test_list_keeps_order_and_timestamps() {
    let body = r#"[
        {"id":"2","name":"B","createdAt":"2025-11-01T12:00:00.000Z"},
        {"id":"1","name":"A","updatedAt":"2025-11-02T12:00:00.000Z"}
    ]"#;
    let tasks = parse_task_list(body).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "2");
    assert_eq!(tasks[0].created_at.as_deref(), Some("2025-11-01T12:00:00.000Z"));
    assert_eq!(tasks[1].updated_at.as_deref(), Some("2025-11-02T12:00:00.000Z"));

    assert!(parse_task_list("[]").unwrap().is_empty());
}

#[test]
fn test_malformed_body_is_invalid_data() {
    assert!(matches!(parse_task_list("not json"), Err(BackendError::InvalidData(_))));
    assert!(matches!(parse_task_list(r#"{"id":"1"}"#), Err(BackendError::InvalidData(_))));
    assert!(matches!(parse_task(r#"{"name":"no id"}"#), Err(BackendError::InvalidData(_))));
}

#[test]
fn test_create_body_shape() {
    let args = CreateTaskArgs::from_name("Buy milk");
    let value = serde_json::to_value(CreateTaskBody::from(&args)).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["active", "createdAt", "description", "name"]);
    assert_eq!(object["name"], "Buy milk");
    assert_eq!(object["description"], NEW_TASK_DESCRIPTION);
    assert_eq!(object["active"], true);
}

#[test]
fn test_update_body_sends_both_flags() {
    let args = UpdateTaskArgs::new("A", "d", false);
    let value = serde_json::to_value(UpdateTaskBody::from(&args)).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["isActive"], false);
    assert_eq!(object["active"], false);
    assert_eq!(object["name"], "A");
    assert_eq!(object["description"], "d");
    assert!(object["updatedAt"].as_str().unwrap().ends_with('Z'));
    assert!(!object.contains_key("createdAt"));
}

#[test]
fn test_from_name_stamps_creation_time() {
    let args = CreateTaskArgs::from_name("Ler livro");
    assert!(args.active);
    assert_eq!(args.description, NEW_TASK_DESCRIPTION);
    assert!(taskpad::utils::datetime::parse_timestamp(&args.created_at).is_some());
}
