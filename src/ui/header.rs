use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let bg_style = Style::default().bg(Theme::BG_ELEVATED);

    let line = Line::from(vec![
        Span::styled(
            " ◆ ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "hovergrid",
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default()
                .fg(Theme::BORDER_DIM)
                .bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            "move the pointer over the paragraph and the grid",
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(bg_style);
    frame.render_widget(paragraph, area);
}
