use crate::backend::Task;
use crate::config::DisplayConfig;
use crate::constants::{EMPTY_LIST, INACTIVE_MARKER, LIST_TITLE, LOADING_TASKS};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::state::{ListPhase, TaskCollection};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub phase: ListPhase,
    pub selected_index: usize,
    pub list_state: ListState,
    pub display_config: DisplayConfig,
    pub focused: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            phase: ListPhase::Loading,
            selected_index: 0,
            list_state: ListState::default(),
            display_config: DisplayConfig::default(),
            focused: true,
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    /// Take a snapshot of the shared collection for rendering.
    pub fn update_data(&mut self, collection: &TaskCollection) {
        let selected_id = self.get_selected_task().map(|task| task.id.clone());

        self.tasks = collection.tasks().to_vec();
        self.phase = collection.phase();

        // Follow the selected task when rows move around it
        if let Some(index) = selected_id.and_then(|id| self.tasks.iter().position(|task| task.id == id)) {
            self.selected_index = index;
        }
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let (bullet_style, name_style) = if task.active {
            (Style::default().fg(Color::Green), Style::default().fg(Color::White))
        } else {
            (
                Style::default().fg(Color::Red),
                Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
            )
        };

        let mut line_spans = vec![
            Span::styled("● ", bullet_style),
            Span::styled(task.name.clone(), name_style),
        ];

        if !task.active {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("[{}]", INACTIVE_MARKER),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        line_spans.push(Span::raw(" "));
        line_spans.push(Span::styled(
            datetime::format_created_date(task.created_at.as_deref(), &self.display_config.date_format),
            Style::default().fg(Color::DarkGray),
        ));

        let mut lines = vec![Line::from(line_spans)];

        if self.display_config.show_descriptions {
            if let Some(first_line) = task.description.lines().find(|line| !line.trim().is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", first_line),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )));
            }
        }

        ListItem::new(lines)
    }

    fn render_message(&self, f: &mut Frame, rect: Rect, message: &str, color: Color) {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(self.block());
        f.render_widget(paragraph, rect);
    }

    fn block(&self) -> Block<'static> {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({})", LIST_TITLE, self.tasks.len()))
            .style(Style::default().fg(border_color))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter => match self.get_selected_task() {
                Some(task) => Action::ShowDialog(DialogType::TaskEdit(task.clone())),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.get_selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation(task.clone())),
                None => Action::None,
            },
            KeyCode::Char(' ') => match self.get_selected_task() {
                Some(task) => Action::ToggleTask(task.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.phase == ListPhase::Loading {
            self.render_message(f, rect, LOADING_TASKS, Color::Yellow);
            return;
        }

        if self.tasks.is_empty() {
            self.render_message(f, rect, EMPTY_LIST, Color::Gray);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
        let mut list_state = self.list_state.clone();

        let tasks_list = List::new(items).block(self.block()).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(tasks_list, rect, &mut list_state);
        self.list_state = list_state;
    }
}
