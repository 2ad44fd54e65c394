//! Modal dialog host.
//!
//! Owns whichever dialog is open: the task edit sidebar, the delete
//! confirmation, help or logs. While a dialog is open it receives every key
//! press. Task dialogs stay open until the store confirms the operation they
//! started, so a failed request can be retried without re-entering anything.

use crate::config::DisplayConfig;
use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, DeleteConfirmationDialog, TaskEditSidebar};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

/// The dialog currently on screen
pub enum ActiveDialog {
    TaskEdit(TaskEditSidebar),
    DeleteConfirmation(DeleteConfirmationDialog),
    Help,
    Logs,
}

pub struct DialogComponent {
    pub active: Option<ActiveDialog>,
    // Scrolling for help and logs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub display_config: DisplayConfig,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            active: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            display_config: DisplayConfig::default(),
            logger: None,
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn edit_sidebar(&self) -> Option<&TaskEditSidebar> {
        match &self.active {
            Some(ActiveDialog::TaskEdit(sidebar)) => Some(sidebar),
            _ => None,
        }
    }

    pub fn delete_confirmation(&self) -> Option<&DeleteConfirmationDialog> {
        match &self.active {
            Some(ActiveDialog::DeleteConfirmation(dialog)) => Some(dialog),
            _ => None,
        }
    }

    fn clear_dialog(&mut self) {
        self.active = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn set_scroll(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Scroll keys shared by help and logs; other keys are ignored.
    fn handle_scroll_key(&mut self, key: KeyEvent) {
        let offset = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_offset.saturating_add(1),
            KeyCode::PageUp => self.scroll_offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.scroll_offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => 0,
            // Renderers clamp the offset to the content length
            KeyCode::End => usize::MAX,
            _ => return,
        };
        self.set_scroll(offset);
    }

    /// Close task dialogs whose operation the store has confirmed, and
    /// re-enable the ones whose operation failed.
    fn apply_result(&mut self, action: &Action) {
        let close = match (&mut self.active, action) {
            (Some(ActiveDialog::TaskEdit(sidebar)), Action::TaskUpdated(task)) => {
                sidebar.is_saving() && sidebar.task_id() == task.id
            }
            (Some(ActiveDialog::TaskEdit(sidebar)), Action::TaskUpdateFailed { id, .. }) => {
                if sidebar.task_id() == id.as_str() {
                    sidebar.save_failed();
                }
                false
            }
            // The task is gone, nothing left to edit
            (Some(ActiveDialog::TaskEdit(sidebar)), Action::TaskDeleted(id)) => sidebar.task_id() == id.as_str(),
            (Some(ActiveDialog::DeleteConfirmation(dialog)), Action::TaskDeleted(id)) => dialog.task().id == *id,
            (Some(ActiveDialog::DeleteConfirmation(dialog)), Action::TaskDeleteFailed { id, .. }) => {
                if dialog.task().id == *id {
                    dialog.delete_failed();
                }
                false
            }
            _ => false,
        };

        if close {
            self.clear_dialog();
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &mut self.active {
            None => Action::None,
            Some(ActiveDialog::TaskEdit(sidebar)) => sidebar.handle_key_events(key),
            Some(ActiveDialog::DeleteConfirmation(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(ActiveDialog::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.active = Some(match dialog_type.clone() {
                    DialogType::TaskEdit(task) => ActiveDialog::TaskEdit(TaskEditSidebar::new(task)),
                    DialogType::DeleteConfirmation(task) => {
                        ActiveDialog::DeleteConfirmation(DeleteConfirmationDialog::new(task))
                    }
                    DialogType::Help => ActiveDialog::Help,
                    DialogType::Logs => ActiveDialog::Logs,
                });
                // Passed on so the root can log it
                Action::ShowDialog(dialog_type)
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::HideDialog
            }
            _ => {
                self.apply_result(&action);
                action
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.active {
            None => {}
            Some(ActiveDialog::TaskEdit(sidebar)) => {
                let area = LayoutManager::sidebar_rect(rect);
                sidebar.render(f, area, &self.display_config.date_format);
            }
            Some(ActiveDialog::DeleteConfirmation(dialog)) => dialog.render(f, rect),
            Some(ActiveDialog::Help) => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(ActiveDialog::Logs) => {
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    self.logger.as_ref(),
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}
