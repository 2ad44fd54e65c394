mod common;

use std::time::{Duration, Instant};

use common::{app_with_tasks, char_key, key, loaded_app, sample_tasks, type_text};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use taskpad::ui::components::Toast;
use taskpad::ui::core::Component;
use taskpad::ui::AppComponent;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[tokio::test]
async fn test_loading_state_before_first_fetch() {
    let mut t = app_with_tasks(sample_tasks()).await;
    let screen = draw(&mut t.app);

    assert!(screen.contains("Sem nome"));
    assert!(screen.contains("Carregando tarefas"));
    assert!(screen.contains("Adicionar tarefa"));
    assert!(!screen.contains("Comprar pão"));
}

#[tokio::test]
async fn test_task_rows() {
    let mut t = loaded_app(sample_tasks()).await;
    let screen = draw(&mut t.app);

    assert!(screen.contains("Tarefas (3)"));
    assert!(screen.contains("Comprar pão"));
    assert!(screen.contains("Pagar contas"));
    assert!(screen.contains("Ligar para o banco"));
    assert!(screen.contains("[inativa]"));
    assert!(screen.contains("memory"));
}

#[tokio::test]
async fn test_empty_list_message() {
    let mut t = loaded_app(vec![]).await;
    let screen = draw(&mut t.app);

    assert!(screen.contains("Nenhuma tarefa"));
    assert!(!screen.contains("Carregando tarefas"));
}

#[tokio::test]
async fn test_expanded_creation_control() {
    let mut t = loaded_app(vec![]).await;
    t.app.handle_key(char_key('a')).await;
    type_text(&mut t.app, "Buy milk").await;

    let screen = draw(&mut t.app);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Add"));
}

#[tokio::test]
async fn test_title_editing() {
    let mut t = loaded_app(vec![]).await;
    t.app.handle_key(char_key('t')).await;
    type_text(&mut t.app, "!").await;

    let screen = draw(&mut t.app);
    assert!(screen.contains("Sem nome!"));
}

#[tokio::test]
async fn test_delete_confirmation_dialog() {
    let mut t = loaded_app(sample_tasks()).await;
    t.app.handle_key(char_key('d')).await;

    let screen = draw(&mut t.app);
    assert!(screen.contains("Confirmar Exclusão"));
    assert!(screen.contains("Tem certeza"));
}

#[tokio::test]
async fn test_edit_sidebar() {
    let mut t = loaded_app(sample_tasks()).await;
    t.app.handle_key(key(KeyCode::Enter)).await;

    let screen = draw(&mut t.app);
    assert!(screen.contains("Editar Tarefa"));
    assert!(screen.contains("Criada em"));
    assert!(screen.contains("Salvar"));
    assert!(screen.contains("Cancelar"));
}

#[tokio::test]
async fn test_help_dialog() {
    let mut t = loaded_app(vec![]).await;
    t.app.handle_key(char_key('?')).await;

    let screen = draw(&mut t.app);
    assert!(screen.contains("Ajuda"));
}

#[test]
fn test_toast_banner_once_fully_in() {
    let start = Instant::now();
    let mut toast = Toast::default();
    toast.show("Tarefa criada", start);

    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    terminal
        .draw(|f| toast.render(f, f.area(), start + Duration::from_millis(500)))
        .unwrap();
    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Tarefa criada"));

    // Nothing is drawn after it has left
    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    terminal
        .draw(|f| toast.render(f, f.area(), start + Duration::from_millis(5000)))
        .unwrap();
    let screen = buffer_text(terminal.backend().buffer());
    assert!(!screen.contains("Tarefa criada"));
}
