#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskpad::backend::memory::MemoryBackend;
use taskpad::backend::{SharedBackend, Task};
use taskpad::config::Config;
use taskpad::constants::DEFAULT_TITLE;
use taskpad::logger::Logger;
use taskpad::storage::LocalStorage;
use taskpad::ui::core::Action;
use taskpad::ui::AppComponent;
use tempfile::TempDir;

/// A database file inside a directory removed when the returned guard drops
pub fn temp_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("taskpad.db");
    (dir, path)
}

pub fn task(id: &str, name: &str, active: bool) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Descrição de {}", name),
        active,
        created_at: Some("2025-11-01T12:00:00.000Z".to_string()),
        updated_at: None,
    }
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        task("1", "Comprar pão", true),
        task("2", "Pagar contas", true),
        task("3", "Ligar para o banco", false),
    ]
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub struct TestApp {
    pub app: AppComponent,
    pub backend: Arc<MemoryBackend>,
    pub db_path: PathBuf,
    _dir: TempDir,
}

/// App wired to an in-memory store holding `tasks`. Nothing is fetched yet.
pub async fn app_with_tasks(tasks: Vec<Task>) -> TestApp {
    let backend = Arc::new(MemoryBackend::with_tasks(tasks));
    let shared: SharedBackend = backend.clone();
    let (dir, db_path) = temp_db();
    let storage = LocalStorage::open(&db_path).await.unwrap();

    let app = AppComponent::new(
        shared,
        storage,
        DEFAULT_TITLE.to_string(),
        &Config::default(),
        Logger::new(),
    );

    TestApp {
        app,
        backend,
        db_path,
        _dir: dir,
    }
}

/// App whose initial fetch has already been applied
pub async fn loaded_app(tasks: Vec<Task>) -> TestApp {
    let mut test_app = app_with_tasks(tasks).await;
    test_app.app.start();
    let action = settle(&mut test_app.app).await;
    assert!(matches!(action, Action::TasksLoaded(_)), "unexpected {:?}", action);
    test_app
}

/// Wait for the next background completion and apply it
pub async fn settle(app: &mut AppComponent) -> Action {
    let action = tokio::time::timeout(Duration::from_secs(5), app.next_background_action())
        .await
        .expect("background operation timed out")
        .expect("background channel closed");
    app.dispatch(action.clone()).await;
    action
}

pub async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c)).await;
    }
}
