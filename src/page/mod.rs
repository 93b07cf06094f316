//! The demo page model.
//!
//! The page owns the elements the hover binder operates on: a paragraph that
//! carries a set of applied classes, and a grid of cells that each carry an
//! applied background color. Visual state lives only in these applied
//! attributes; clearing a highlight restores the exact pre-hover state.

use crate::config::{GridConfig, ParagraphConfig};
use crate::hover::CellPos;
use ratatui::style::Color;
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct ParagraphBlock {
    pub text: String,
    classes: BTreeSet<String>,
}

impl ParagraphBlock {
    pub fn new(text: String) -> Self {
        Self {
            text,
            classes: BTreeSet::new(),
        }
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub background: Option<Color>,
}

impl Cell {
    fn new(text: String) -> Self {
        Self {
            text,
            background: None,
        }
    }
}

/// Row-major grid of cells. Shape is fixed at construction.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build the grid from configured cell labels. Rows shorter than the
    /// widest row are padded with empty cells so every row has the same
    /// number of columns.
    pub fn from_config(cfg: &GridConfig) -> Self {
        let rows = cfg.rows.len();
        let cols = cfg.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows * cols);
        for row in &cfg.rows {
            for col in 0..cols {
                let text = row.get(col).cloned().unwrap_or_default();
                cells.push(Cell::new(text));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Apply or clear the background attribute of one cell. Out-of-range
    /// positions are ignored.
    pub fn set_background(&mut self, pos: CellPos, color: Option<Color>) {
        if let Some(i) = self.index(pos) {
            self.cells[i].background = color;
        }
    }

    /// True if no cell currently carries a background attribute.
    pub fn is_unstyled(&self) -> bool {
        self.cells.iter().all(|c| c.background.is_none())
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }
}

#[derive(Debug)]
pub struct Page {
    pub paragraph: ParagraphBlock,
    pub grid: Grid,
}

impl Page {
    pub fn from_config(paragraph: &ParagraphConfig, grid: &GridConfig) -> Self {
        Self {
            paragraph: ParagraphBlock::new(paragraph.text.clone()),
            grid: Grid::from_config(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        Grid::from_config(&GridConfig {
            rows: vec![
                vec!["a".into(), "b".into(), "c".into()],
                vec!["d".into(), "e".into(), "f".into()],
                vec!["g".into(), "h".into(), "i".into()],
            ],
        })
    }

    #[test]
    fn class_toggle_is_idempotent() {
        let mut p = ParagraphBlock::new("hello".into());
        assert!(!p.has_class("pretty-hover"));
        p.add_class("pretty-hover");
        p.add_class("pretty-hover");
        assert!(p.has_class("pretty-hover"));
        p.remove_class("pretty-hover");
        assert!(!p.has_class("pretty-hover"));
        p.remove_class("pretty-hover");
        assert!(!p.has_class("pretty-hover"));
    }

    #[test]
    fn background_set_and_clear_restores_unstyled_state() {
        let mut grid = grid_3x3();
        assert!(grid.is_unstyled());
        grid.set_background(CellPos::new(1, 2), Some(Color::Red));
        assert!(!grid.is_unstyled());
        assert_eq!(
            grid.cell(CellPos::new(1, 2)).unwrap().background,
            Some(Color::Red)
        );
        grid.set_background(CellPos::new(1, 2), None);
        assert!(grid.is_unstyled());
    }

    #[test]
    fn out_of_range_background_is_ignored() {
        let mut grid = grid_3x3();
        grid.set_background(CellPos::new(9, 9), Some(Color::Red));
        assert!(grid.is_unstyled());
        assert!(grid.cell(CellPos::new(9, 9)).is_none());
    }

    #[test]
    fn ragged_rows_are_padded_to_widest() {
        let grid = Grid::from_config(&GridConfig {
            rows: vec![
                vec!["a".into(), "b".into(), "c".into()],
                vec!["d".into()],
            ],
        });
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(CellPos::new(1, 0)).unwrap().text, "d");
        assert_eq!(grid.cell(CellPos::new(1, 2)).unwrap().text, "");
    }

    #[test]
    fn empty_config_builds_empty_grid() {
        let grid = Grid::from_config(&GridConfig { rows: vec![] });
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
    }
}
