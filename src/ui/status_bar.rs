use crate::app::state::AppState;
use crate::hover::HoverTarget;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Hovered target indicator
    let hovered = match state.hovered() {
        Some(HoverTarget::Paragraph) => "paragraph".to_string(),
        Some(HoverTarget::Cell(pos)) => format!("cell {},{}", pos.row, pos.col),
        None => "—".to_string(),
    };
    parts.push(Span::styled(
        format!(" [{}] ", hovered),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Grid shape
    parts.push(Span::styled(
        format!(
            " grid {}x{} ",
            state.page.grid.rows(),
            state.page.grid.cols()
        ),
        Theme::status_bar(),
    ));

    // Lit while any cell still carries a background attribute; stays lit if
    // the pointer left the window without a final move inside it
    if !state.page.grid.is_unstyled() {
        parts.push(Span::styled(
            " ● ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    // Clock
    let clock = Local::now()
        .format(&state.config.ui.timestamp_format)
        .to_string();
    let hint = " q to quit ";

    // Pad to push the clock and quit hint to the right edge
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let right = clock.chars().count() + 2 + hint.len();
    let remaining = (area.width as usize).saturating_sub(used + right);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", clock),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));
    parts.push(Span::styled(
        hint,
        Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
