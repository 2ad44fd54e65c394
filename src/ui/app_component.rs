use std::time::Instant;

use crate::backend::{CreateTaskArgs, SharedBackend, UpdateTaskArgs};
use crate::config::Config;
use crate::constants::{
    ERROR_TASK_CREATE_FAILED, ERROR_TASK_DELETE_FAILED, ERROR_TASK_UPDATE_FAILED, ERROR_TITLE_SAVE_FAILED,
    SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
};
use crate::logger::Logger;
use crate::storage::LocalStorage;
use crate::ui::components::{DialogComponent, TaskCreationComponent, TaskListComponent, TitleComponent, Toast};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::state::TaskCollection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: TaskCollection,
    pub focus: Focus,
}

pub struct AppComponent {
    // Component composition
    title: TitleComponent,
    creation: TaskCreationComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,
    toast: Toast,

    // Application state
    state: AppState,

    // Services
    backend: SharedBackend,
    storage: LocalStorage,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: SharedBackend, storage: LocalStorage, title: String, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new(logger.clone());

        let mut task_list = TaskListComponent::new();
        task_list.update_display_config(config.display.clone());

        let mut dialog = DialogComponent::new();
        dialog.update_display_config(config.display.clone());
        dialog.set_logger(logger.clone());

        let mut app = Self {
            title: TitleComponent::new(title),
            creation: TaskCreationComponent::new(),
            task_list,
            dialog,
            toast: Toast::new(config.ui.toast_dwell()),
            state: AppState::default(),
            backend,
            storage,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.state.tasks
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    pub fn title(&self) -> &TitleComponent {
        &self.title
    }

    pub fn creation(&self) -> &TaskCreationComponent {
        &self.creation
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Get the number of background operations not yet cleaned up
    pub fn active_operation_count(&self) -> usize {
        self.task_manager.operation_count()
    }

    /// Issue the initial full fetch
    pub fn start(&mut self) {
        self.logger.log(format!(
            "AppComponent: Starting with '{}' backend",
            self.backend.backend_type()
        ));
        self.task_manager.spawn_fetch(self.backend.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.task_list.update_data(&self.state.tasks);
        self.task_list.focused = self.state.focus == Focus::List;
        self.creation.set_focused(self.state.focus == Focus::Creation);
    }

    fn notify(&mut self, message: &str) {
        self.toast.show(message, Instant::now());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - refreshing tasks".to_string());
                Action::RefreshTasks
            }
            KeyCode::Char('a') => Action::FocusCreation,
            KeyCode::Char('t') => Action::EditTitle,
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.logger.log("Global key: '?' or 'h' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    /// Route a key press to whatever currently owns the keyboard
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.state.focus {
            Focus::Title => self.title.handle_key_events(key),
            Focus::Creation => self.creation.handle_key_events(key),
            Focus::List => {
                let task_list_action = self.task_list.handle_key_events(key);
                if matches!(task_list_action, Action::None) {
                    self.handle_global_key(key)
                } else {
                    task_list_action
                }
            }
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::FocusList => {
                self.state.focus = Focus::List;
                Action::None
            }
            Action::FocusCreation => {
                self.state.focus = Focus::Creation;
                Action::None
            }
            Action::EditTitle => {
                self.state.focus = Focus::Title;
                Action::None
            }
            Action::TitleCommitted(title) => {
                self.state.focus = Focus::List;
                self.logger.log(format!("Title: Saving '{}'", title));
                self.task_manager.spawn_title_save(self.storage.clone(), title);
                Action::None
            }
            Action::TitleSaved => {
                self.logger.log("Title: Saved".to_string());
                Action::None
            }
            Action::TitleSaveFailed(error) => {
                self.logger.log(format!("Title: Failed to save: {}", error));
                self.notify(ERROR_TITLE_SAVE_FAILED);
                Action::None
            }
            Action::RefreshTasks => {
                self.task_manager.spawn_fetch(self.backend.clone());
                Action::None
            }
            Action::TasksLoaded(tasks) => {
                self.logger.log(format!("Fetch: Loaded {} tasks", tasks.len()));
                self.state.tasks.load(tasks);
                Action::None
            }
            Action::TasksLoadFailed(error) => {
                // No banner, the list just stops loading
                self.logger.log(format!("Fetch: Keeping current list after error: {}", error));
                self.state.tasks.load_failed();
                Action::None
            }
            Action::CreateTask { name } => {
                self.logger.log(format!("Task: Creating task '{}'", name));
                self.task_manager
                    .spawn_create(self.backend.clone(), CreateTaskArgs::from_name(name));
                Action::None
            }
            Action::TaskCreated(task) => {
                self.logger.log(format!("Task: Created '{}' (ID: {})", task.name, task.id));
                self.state.tasks.prepend(task);
                if self.state.focus == Focus::Creation {
                    self.state.focus = Focus::List;
                }
                self.notify(SUCCESS_TASK_CREATED);
                Action::None
            }
            Action::TaskCreateFailed(error) => {
                self.logger.log(format!("Task: Create failed: {}", error));
                self.notify(ERROR_TASK_CREATE_FAILED);
                Action::None
            }
            Action::UpdateTask {
                id,
                name,
                description,
                active,
            } => {
                self.logger.log(format!("Task: Updating task {}", id));
                self.task_manager.spawn_update(
                    self.backend.clone(),
                    id,
                    UpdateTaskArgs::new(name, description, active),
                );
                Action::None
            }
            Action::ToggleTask(id) => {
                match self.state.tasks.find(&id) {
                    Some(task) => {
                        let args = UpdateTaskArgs::new(task.name.clone(), task.description.clone(), !task.active);
                        self.logger
                            .log(format!("Task: Toggling task {} to active={}", id, args.active));
                        self.task_manager.spawn_update(self.backend.clone(), id, args);
                    }
                    None => self.logger.log(format!("Task: Cannot toggle unknown task {}", id)),
                }
                Action::None
            }
            Action::TaskUpdated(task) => {
                self.logger.log(format!("Task: Updated '{}' (ID: {})", task.name, task.id));
                let id = task.id.clone();
                if !self.state.tasks.replace(task) {
                    self.logger.log(format!("Task: Updated task {} is no longer listed", id));
                }
                self.notify(SUCCESS_TASK_UPDATED);
                Action::None
            }
            Action::TaskUpdateFailed { id, error } => {
                self.logger.log(format!("Task: Update of {} failed: {}", id, error));
                self.notify(ERROR_TASK_UPDATE_FAILED);
                Action::None
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: Deleting task {}", id));
                self.task_manager.spawn_delete(self.backend.clone(), id);
                Action::None
            }
            Action::TaskDeleted(id) => {
                self.logger.log(format!("Task: Deleted task {}", id));
                self.state.tasks.remove(&id);
                self.notify(SUCCESS_TASK_DELETED);
                Action::None
            }
            Action::TaskDeleteFailed { id, error } => {
                self.logger.log(format!("Task: Delete of {} failed: {}", id, error));
                self.notify(ERROR_TASK_DELETE_FAILED);
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Run an action through the component hierarchy and the app logic
    pub async fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let result = self.handle_app_action(action).await;
        self.sync_component_data();
        result
    }

    /// Process a key press as the event loop would
    pub async fn handle_key(&mut self, key: KeyEvent) -> Action {
        let action = self.route_key(key);
        self.dispatch(action).await
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        match event_type {
            EventType::Key(key) => {
                self.handle_key(key).await;
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
        Ok(())
    }

    /// Drain completed background operations without waiting
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_operations();
        for operation in &finished {
            self.logger.log(format!("Background: Finished operation {}", operation));
        }

        actions
    }

    /// Wait for the next background operation to report back
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Advance time-based state. Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_visible = self.toast.is_visible();
        let visible = self.toast.tick(now);
        visible || was_visible
    }

    fn render_status_bar(&self, f: &mut Frame, rect: Rect) {
        let hints = match self.state.focus {
            Focus::List => "a adicionar • Enter editar • Espaço ativa • d deletar • r recarregar • ? ajuda • q sair",
            Focus::Creation => "Enter adicionar • Esc voltar",
            Focus::Title => "Enter/Esc confirmar título",
        };

        let mut spans = vec![Span::styled(
            format!(" {} ", self.backend.backend_type()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )];
        let pending = self.task_manager.operation_count();
        if pending > 0 {
            spans.push(Span::styled(format!(" ⟳ {} ", pending), Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(format!(" {}", hints), Style::default().fg(Color::Gray)));

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.title.update(action);
        let action = self.creation.update(action);

        // Return for app-level handling
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        self.title.render(f, layout.header);
        self.creation.render(f, layout.creation);
        self.task_list.render(f, layout.list);
        self.render_status_bar(f, layout.status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }

        self.toast.render(f, rect, Instant::now());
    }
}
