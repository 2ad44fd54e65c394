//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::backend::Task;
use crate::constants::{DELETING, DIALOG_TITLE_DELETE};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

/// Holds the task pending deletion until the user confirms or cancels.
pub struct DeleteConfirmationDialog {
    task: Task,
    deleting: bool,
}

impl DeleteConfirmationDialog {
    pub fn new(task: Task) -> Self {
        Self { task, deleting: false }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// The request failed: allow another confirmation.
    pub fn delete_failed(&mut self) {
        self.deleting = false;
    }

    pub fn message(&self) -> String {
        format!("Tem certeza que deseja deletar a tarefa \"{}\"?", self.task.name)
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if self.deleting {
                    Action::None
                } else {
                    self.deleting = true;
                    Action::DeleteTask(self.task.id.clone())
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect_lines(50, 8, area);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(DIALOG_TITLE_DELETE, Color::Red);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(dialog_area.inner(Margin {
                horizontal: 2,
                vertical: 1,
            }));

        let message_paragraph = Paragraph::new(self.message())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message_paragraph, chunks[0]);

        if self.deleting {
            let status = Paragraph::new(DELETING)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(status, chunks[1]);
        } else {
            let instructions = common::create_instructions_paragraph(&[
                shortcuts::Y_CONFIRM,
                shortcuts::SEPARATOR,
                shortcuts::N_CANCEL,
            ]);
            f.render_widget(instructions, chunks[1]);
        }
    }
}
