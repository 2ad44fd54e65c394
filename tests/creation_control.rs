mod common;

use common::{char_key, key, loaded_app, settle, type_text};
use crossterm::event::KeyCode;
use taskpad::backend::memory::Operation;
use taskpad::constants::{ERROR_TASK_CREATE_FAILED, SUCCESS_TASK_CREATED};
use taskpad::ui::components::TaskCreationComponent;
use taskpad::ui::core::{Action, Component, Focus};

#[test]
fn test_first_activation_only_expands() {
    let mut creation = TaskCreationComponent::new();
    assert!(!creation.is_expanded());

    assert!(matches!(creation.activate(), Action::None));
    assert!(creation.is_expanded());
    assert!(!creation.is_submitting());
}

#[test]
fn test_blank_input_is_not_submitted() {
    let mut creation = TaskCreationComponent::new();
    creation.activate();

    assert!(matches!(creation.activate(), Action::None));

    for c in "   ".chars() {
        creation.handle_key_events(char_key(c));
    }
    assert!(matches!(creation.activate(), Action::None));
    assert!(creation.is_expanded());
    assert!(!creation.is_submitting());
}

#[test]
fn test_submit_trims_and_blocks_double_submit() {
    let mut creation = TaskCreationComponent::new();
    creation.activate();
    for c in "  Buy milk  ".chars() {
        creation.handle_key_events(char_key(c));
    }

    match creation.activate() {
        Action::CreateTask { name } => assert_eq!(name, "Buy milk"),
        other => panic!("expected CreateTask, got {:?}", other),
    }
    assert!(creation.is_submitting());

    // Further activations while the request is in flight do nothing
    assert!(matches!(creation.activate(), Action::None));
    assert!(matches!(creation.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_escape_collapses_and_keeps_text() {
    let mut creation = TaskCreationComponent::new();
    creation.activate();
    creation.handle_key_events(char_key('x'));

    assert!(matches!(creation.handle_key_events(key(KeyCode::Esc)), Action::FocusList));
    assert!(!creation.is_expanded());
    assert_eq!(creation.input(), "x");
}

#[tokio::test]
async fn test_non_empty_input_sends_one_request_and_resets() {
    let mut t = loaded_app(vec![]).await;

    t.app.handle_key(char_key('a')).await;
    assert_eq!(t.app.focus(), Focus::Creation);
    assert!(t.app.creation().is_expanded());

    type_text(&mut t.app, "Buy milk").await;
    t.app.handle_key(key(KeyCode::Enter)).await;
    t.app.handle_key(key(KeyCode::Enter)).await;
    assert!(t.app.creation().is_submitting());

    let action = settle(&mut t.app).await;
    assert!(matches!(action, Action::TaskCreated(_)));

    assert_eq!(t.backend.request_count(Operation::Create), 1);
    assert!(!t.app.creation().is_expanded());
    assert_eq!(t.app.creation().input(), "");
    assert_eq!(t.app.tasks().len(), 1);
    assert_eq!(t.app.tasks().get(0).unwrap().name, "Buy milk");
    assert_eq!(t.app.toast().message(), Some(SUCCESS_TASK_CREATED));
    assert_eq!(t.app.focus(), Focus::List);
}

#[tokio::test]
async fn test_created_task_uses_placeholder_fields() {
    let mut t = loaded_app(vec![]).await;

    t.app.handle_key(char_key('a')).await;
    type_text(&mut t.app, "Ler livro").await;
    t.app.handle_key(key(KeyCode::Enter)).await;
    settle(&mut t.app).await;

    let stored = t.backend.tasks();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, "Nova tarefa criada pelo app");
    assert!(stored[0].active);
    assert!(stored[0].created_at.is_some());
}

#[tokio::test]
async fn test_whitespace_input_sends_nothing() {
    let mut t = loaded_app(vec![]).await;

    t.app.handle_key(char_key('a')).await;
    type_text(&mut t.app, "   ").await;
    t.app.handle_key(key(KeyCode::Enter)).await;

    assert_eq!(t.backend.request_count(Operation::Create), 0);
    assert!(t.app.creation().is_expanded());
    assert!(!t.app.creation().is_submitting());
    assert!(t.app.tasks().is_empty());
}

#[tokio::test]
async fn test_server_error_keeps_input_for_retry() {
    let mut t = loaded_app(vec![]).await;
    t.backend.fail_with_status(Operation::Create, 500);

    t.app.handle_key(char_key('a')).await;
    type_text(&mut t.app, "Buy milk").await;
    t.app.handle_key(key(KeyCode::Enter)).await;

    let action = settle(&mut t.app).await;
    assert!(matches!(action, Action::TaskCreateFailed(_)));

    assert_eq!(t.app.creation().input(), "Buy milk");
    assert!(t.app.creation().is_expanded());
    assert!(!t.app.creation().is_submitting());
    assert!(t.app.tasks().is_empty());
    assert_eq!(t.app.toast().message(), Some(ERROR_TASK_CREATE_FAILED));

    // The retry goes through once the store recovers
    t.backend.clear_failure(Operation::Create);
    t.app.handle_key(key(KeyCode::Enter)).await;
    settle(&mut t.app).await;
    assert_eq!(t.backend.request_count(Operation::Create), 2);
    assert_eq!(t.app.tasks().len(), 1);
}

#[tokio::test]
async fn test_new_task_is_first_row() {
    let mut t = loaded_app(common::sample_tasks()).await;

    t.app.handle_key(char_key('a')).await;
    type_text(&mut t.app, "Nova").await;
    t.app.handle_key(key(KeyCode::Enter)).await;
    settle(&mut t.app).await;

    assert_eq!(t.app.tasks().len(), 4);
    assert_eq!(t.app.tasks().get(0).unwrap().name, "Nova");
    assert_eq!(t.app.tasks().get(1).unwrap().id, "1");
}
