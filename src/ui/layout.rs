use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub paragraph_panel: Rect,
    pub grid_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: header | paragraph demo | hover grid | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(5), // Paragraph demo
            Constraint::Min(7),    // Hover grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        paragraph_panel: chunks[1],
        grid_panel: chunks[2],
        status_bar: chunks[3],
    }
}

/// Inner area of a bordered panel. Must match what `Block::inner` returns
/// for a panel drawn with `Borders::ALL` and no padding, since hover regions
/// are computed from this while the panels are drawn through `Block`.
pub fn panel_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
