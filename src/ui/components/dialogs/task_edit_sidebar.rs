//! Task edit sidebar
//!
//! Slides in on the right of the task list with the selected task's fields.
//! It is closed by the dialog host once the store confirms the update.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::backend::Task;
use crate::constants::{
    BUTTON_CANCEL, BUTTON_SAVE, DIALOG_TITLE_EDIT, LABEL_ACTIVE, LABEL_CREATED_AT, LABEL_DESCRIPTION, LABEL_NAME,
    SAVING,
};
use crate::ui::core::Action;
use crate::utils::datetime;

/// Focusable parts of the sidebar, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Description,
    Active,
    Cancel,
    Save,
}

impl EditField {
    const ORDER: [EditField; 5] = [
        EditField::Name,
        EditField::Description,
        EditField::Active,
        EditField::Cancel,
        EditField::Save,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct TaskEditSidebar {
    task: Task,
    name: String,
    description: String,
    active: bool,
    focus: EditField,
    saving: bool,
}

impl TaskEditSidebar {
    pub fn new(task: Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            active: task.active,
            task,
            focus: EditField::Name,
            saving: false,
        }
    }

    /// Id of the task being edited
    pub fn task_id(&self) -> &str {
        &self.task.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn focus(&self) -> EditField {
        self.focus
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The update failed: keep the edited values and allow saving again.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }

    fn save(&mut self) -> Action {
        if self.saving {
            return Action::None;
        }
        self.saving = true;
        Action::UpdateTask {
            id: self.task.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            EditField::Name => Some(&mut self.name),
            EditField::Description => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.save(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => return Action::HideDialog,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            _ => {}
        }

        // Fields are frozen while the update is in flight
        if self.saving {
            return Action::None;
        }

        match (self.focus, key.code) {
            (EditField::Save, KeyCode::Enter) => self.save(),
            (EditField::Cancel, KeyCode::Enter) => Action::HideDialog,
            (EditField::Active, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.active = !self.active;
                Action::None
            }
            (EditField::Name, KeyCode::Enter) => {
                self.focus = EditField::Description;
                Action::None
            }
            (EditField::Description, KeyCode::Enter) => {
                self.description.push('\n');
                Action::None
            }
            (_, KeyCode::Char(c)) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
                Action::None
            }
            (_, KeyCode::Backspace) => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, date_format: &str) {
        f.render_widget(Clear, area);

        let title = if self.saving {
            format!("{} - {}", DIALOG_TITLE_EDIT, SAVING)
        } else {
            DIALOG_TITLE_EDIT.to_string()
        };
        let block = common::create_dialog_block(&title, Color::Cyan);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Min(4),    // Description
                Constraint::Length(1), // Active
                Constraint::Length(1), // Created at
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Instructions
            ])
            .split(area.inner(Margin {
                horizontal: 1,
                vertical: 1,
            }));

        f.render_widget(
            common::create_input_paragraph(&self.name, LABEL_NAME, "", self.focus == EditField::Name),
            chunks[0],
        );
        f.render_widget(
            common::create_textarea_paragraph(
                &self.description,
                LABEL_DESCRIPTION,
                self.focus == EditField::Description,
            ),
            chunks[1],
        );
        f.render_widget(
            common::create_checkbox_paragraph(self.active, LABEL_ACTIVE, self.focus == EditField::Active),
            chunks[2],
        );

        let created = datetime::format_created_date(self.task.created_at.as_deref(), date_format);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{}: ", LABEL_CREATED_AT), Style::default().fg(Color::Gray)),
                Span::styled(created, Style::default().fg(Color::White)),
            ])),
            chunks[3],
        );

        let save_label = if self.saving { SAVING } else { BUTTON_SAVE };
        let buttons = Line::from(vec![
            common::create_button_span(BUTTON_CANCEL, Color::Red, self.focus == EditField::Cancel),
            Span::raw("  "),
            common::create_button_span(save_label, Color::Green, self.focus == EditField::Save),
        ]);
        f.render_widget(Paragraph::new(buttons), chunks[5]);

        f.render_widget(
            common::create_instructions_paragraph(&[
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_S_SAVE,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]),
            chunks[6],
        );
    }
}
