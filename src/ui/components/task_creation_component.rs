//! Inline task creation control.
//!
//! Collapsed it shows the `+ Adicionar tarefa` affordance; activating it opens
//! a text input, and activating again submits the trimmed name. The control
//! stays expanded with its text until the store confirms the creation.

use crate::constants::{ADD_TASK_BUTTON, ADD_TASK_LABEL, SAVING};
use crate::ui::components::dialogs::common;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct TaskCreationComponent {
    expanded: bool,
    input: String,
    submitting: bool,
    focused: bool,
}

impl TaskCreationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Expand when collapsed, submit when expanded.
    ///
    /// Only a non-blank name produces a request, and only one request is in
    /// flight at a time.
    pub fn activate(&mut self) -> Action {
        if !self.expanded {
            self.expanded = true;
            return Action::None;
        }
        if self.submitting {
            return Action::None;
        }

        let name = self.input.trim();
        if name.is_empty() {
            return Action::None;
        }

        self.submitting = true;
        Action::CreateTask { name: name.to_string() }
    }

    fn reset(&mut self) {
        self.input.clear();
        self.expanded = false;
        self.submitting = false;
    }
}

impl Component for TaskCreationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.activate(),
            KeyCode::Esc => {
                // Typed text is kept for the next activation
                self.expanded = false;
                Action::FocusList
            }
            KeyCode::Backspace if self.expanded && !self.submitting => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char(c)
                if self.expanded && !self.submitting && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusCreation => {
                self.expanded = true;
            }
            Action::TaskCreated(_) => self.reset(),
            Action::TaskCreateFailed(_) => {
                // Keep the text for a retry
                self.submitting = false;
                self.expanded = true;
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.expanded {
            let style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let affordance = Paragraph::new(Line::from(Span::styled(format!("+ {}", ADD_TASK_LABEL), style)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(Color::DarkGray)),
                );
            f.render_widget(affordance, rect);
            return;
        }

        let button_label = if self.submitting { SAVING } else { ADD_TASK_BUTTON };
        let button_width = button_label.chars().count() as u16 + 4;
        let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(button_width)]).split(rect);

        let input = common::create_input_paragraph(
            &self.input,
            ADD_TASK_LABEL,
            ADD_TASK_LABEL,
            self.focused && !self.submitting,
        );
        f.render_widget(input, chunks[0]);

        let button_color = if self.submitting { Color::Yellow } else { Color::Green };
        let button = Paragraph::new(Line::from(common::create_button_span(
            button_label,
            button_color,
            self.focused && !self.submitting,
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(button_color)),
        );
        f.render_widget(button, chunks[1]);
    }
}
