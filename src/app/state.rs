use crate::config::AppConfig;
use crate::hover::{grid, HoverBinder, HoverTarget};
use crate::page::Page;
use crate::ui::{layout, theme};
use anyhow::{Context, Result};
use ratatui::layout::Rect;
use ratatui::style::Color;

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub binder: HoverBinder,
    /// Background color applied to row/column siblings of a hovered cell.
    pub highlight_color: Color,
    /// Class name toggled on the paragraph while hovered.
    pub marker_class: String,
    /// Terminal area, tracked through resize events.
    pub area: Rect,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let highlight_color = theme::parse_color(&config.ui.highlight_color)
            .with_context(|| format!("invalid ui.highlight_color {:?}", config.ui.highlight_color))?;
        let page = Page::from_config(&config.paragraph, &config.grid);
        let marker_class = config.ui.marker_class.clone();
        Ok(Self {
            config,
            page,
            binder: HoverBinder::new(),
            highlight_color,
            marker_class,
            area: Rect::default(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        })
    }

    /// Track a new terminal size and rebuild the hover regions from the
    /// resulting page geometry.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.rebuild_regions();
        self.dirty = true;
    }

    pub fn hovered(&self) -> Option<HoverTarget> {
        self.binder.current()
    }

    fn rebuild_regions(&mut self) {
        let app_layout = layout::compute_layout(self.area);
        let mut regions = Vec::new();

        let paragraph_area = layout::panel_inner(app_layout.paragraph_panel);
        if paragraph_area.width > 0 && paragraph_area.height > 0 {
            regions.push((paragraph_area, HoverTarget::Paragraph));
        }

        let grid_area = layout::panel_inner(app_layout.grid_panel);
        for (pos, rect) in grid::cell_rects(grid_area, self.page.grid.rows(), self.page.grid.cols())
        {
            regions.push((rect, HoverTarget::Cell(pos)));
        }

        self.binder.set_regions(regions);
    }
}
