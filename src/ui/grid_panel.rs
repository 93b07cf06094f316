use crate::app::state::AppState;
use crate::hover::grid::cell_rects;
use crate::hover::{CellPos, HoverTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Hover grid ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = &state.page.grid;
    if grid.is_empty() {
        let empty =
            Paragraph::new("No grid configured").style(Style::default().fg(Theme::TEXT_MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    for (pos, rect) in cell_rects(inner, grid.rows(), grid.cols()) {
        render_cell(frame, rect, state, pos);
    }
}

fn render_cell(frame: &mut Frame, area: Rect, state: &AppState, pos: CellPos) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(cell) = state.page.grid.cell(pos) else {
        return;
    };
    let hovered = state.hovered() == Some(HoverTarget::Cell(pos));

    // The cell's background attribute fills the whole cell, border included
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(if hovered {
            Theme::border_focused()
        } else {
            Theme::grid_line()
        });
    if let Some(bg) = cell.background {
        block = block.style(Style::default().bg(bg));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text_style = if cell.background.is_some() {
        Theme::cell_text_highlighted()
    } else {
        Theme::cell_text()
    };

    // Center the label in the cell
    let label = cell.text.as_str();
    let pad = (inner.width as usize).saturating_sub(UnicodeWidthStr::width(label)) / 2;
    let mid = inner.height / 2;
    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for y in 0..inner.height {
        if y == mid {
            lines.push(Line::from(format!("{:pad$}{}", "", label, pad = pad)));
        } else {
            lines.push(Line::from(""));
        }
    }
    let body = Paragraph::new(lines).style(text_style);
    frame.render_widget(body, inner);
}
