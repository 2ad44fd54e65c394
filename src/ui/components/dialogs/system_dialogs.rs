use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_CONTENT: &str = r"
TASKPAD - lista de tarefas no terminal
======================================

NAVEGAÇÃO
---------
j/k, ↑/↓    Mover seleção na lista
Enter       Editar tarefa selecionada
Esc         Fechar diálogo ou sair

TAREFAS
-------
a           Adicionar tarefa (Enter confirma)
Espaço      Alternar tarefa ativa/inativa
d, Delete   Deletar tarefa (com confirmação)
r           Recarregar lista

EDIÇÃO
------
Tab         Próximo campo
Shift+Tab   Campo anterior
Ctrl+S      Salvar
Esc         Cancelar

TÍTULO
------
t           Editar título da lista
Enter, Esc  Confirmar título

GERAL
-----
G           Mostrar logs
?, h        Mostrar esta ajuda
q, Ctrl+C   Sair

Pressione 'Esc', '?' ou 'h' para fechar
";

/// Render `content` inside a centered, scrollable panel.
fn render_scrollable_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_scrollable_panel(f, area, DIALOG_TITLE_HELP, HELP_CONTENT, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();

    let logs_content = if logs.is_empty() {
        "Nenhum log disponível".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_panel(f, area, DIALOG_TITLE_LOGS, &logs_content, scroll_offset, scrollbar_state);
}
