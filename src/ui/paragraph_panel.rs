use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let marked = state.page.paragraph.has_class(&state.marker_class);

    let block = Block::default()
        .title(" Paragraph ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if marked {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if marked {
        Theme::marker()
    } else {
        Theme::paragraph_text()
    };
    let paragraph = Paragraph::new(state.page.paragraph.text.as_str())
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
