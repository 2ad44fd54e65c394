use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Editable list title shown in the header.
///
/// The title is committed as typed: empty strings are accepted.
pub struct TitleComponent {
    title: String,
    editing: bool,
    buffer: String,
}

impl TitleComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            editing: false,
            buffer: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text being typed while editing
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn start_editing(&mut self) {
        self.buffer = self.title.clone();
        self.editing = true;
    }

    fn commit(&mut self) -> Action {
        self.editing = false;
        self.title = std::mem::take(&mut self.buffer);
        Action::TitleCommitted(self.title.clone())
    }
}

impl Component for TitleComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.editing {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.commit(),
            KeyCode::Backspace => {
                self.buffer.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::EditTitle = action {
            if !self.editing {
                self.start_editing();
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (line, border_color) = if self.editing {
            (
                Line::from(vec![
                    Span::styled(self.buffer.clone(), Style::default().fg(Color::White)),
                    Span::styled("█", Style::default().fg(Color::Cyan)),
                    Span::styled("  ✓ Enter", Style::default().fg(Color::Green)),
                ]),
                Color::Cyan,
            )
        } else {
            (
                Line::from(vec![
                    Span::styled(
                        self.title.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  ✎ t", Style::default().fg(Color::DarkGray)),
                ]),
                Color::Gray,
            )
        };

        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        );
        f.render_widget(header, rect);
    }
}
