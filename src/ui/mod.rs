mod grid_panel;
mod header;
mod paragraph_panel;
mod status_bar;

pub mod layout;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header);
    paragraph_panel::render(frame, app_layout.paragraph_panel, state);
    grid_panel::render(frame, app_layout.grid_panel, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
