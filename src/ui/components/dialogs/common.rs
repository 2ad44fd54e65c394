use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field block; the focused field shows a visual cursor.
///
/// An empty, unfocused field shows `placeholder` dimmed instead.
pub fn create_input_paragraph(
    input_buffer: &str,
    field_title: &str,
    placeholder: &str,
    focused: bool,
) -> Paragraph<'static> {
    let cursor_char = "█";

    let line = if focused {
        Line::from(vec![
            Span::styled(input_buffer.to_string(), Style::default().fg(Color::White)),
            Span::styled(cursor_char, Style::default().fg(Color::Cyan)),
        ])
    } else if input_buffer.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(input_buffer.to_string(), Style::default().fg(Color::White)))
    };

    Paragraph::new(line).block(field_block(field_title, focused))
}

/// Creates a wrapping multi-line input field
pub fn create_textarea_paragraph(text: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::White))))
        .collect();

    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    Paragraph::new(lines)
        .block(field_block(field_title, focused))
        .wrap(Wrap { trim: false })
}

/// Creates a `[x] label` checkbox line
pub fn create_checkbox_paragraph(checked: bool, label: &str, focused: bool) -> Paragraph<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", mark), style),
        Span::styled(label.to_string(), style),
    ]))
}

/// Creates a button label, highlighted when focused
pub fn create_button_span(label: &str, color: Color, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    Span::styled(format!(" {} ", label), style)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancelar");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Próximo campo");
    pub const CTRL_S_SAVE: InstructionShortcut = ("Ctrl+S", Color::Green, " Salvar");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Espaço", Color::Yellow, " Ativa");
    pub const Y_CONFIRM: InstructionShortcut = ("y/Enter", Color::Red, " Deletar");
    pub const N_CANCEL: InstructionShortcut = ("n/Esc", Color::Gray, " Cancelar");
}
