//! Row/column sibling selection and grid geometry.

use ratatui::layout::Rect;

/// Zero-based position of a cell in the grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cells affected by hovering `pos` in a `rows` x `cols` grid: every cell in
/// the same row plus every cell sharing the column index across the other
/// rows. The hovered cell itself appears exactly once. Out-of-range
/// positions affect nothing.
pub fn affected_cells(rows: usize, cols: usize, pos: CellPos) -> Vec<CellPos> {
    if pos.row >= rows || pos.col >= cols {
        return Vec::new();
    }
    let mut cells = Vec::with_capacity(rows + cols);
    for col in 0..cols {
        cells.push(CellPos::new(pos.row, col));
    }
    for row in 0..rows {
        if row != pos.row {
            cells.push(CellPos::new(row, pos.col));
        }
    }
    cells
}

/// Split `area` into per-cell rectangles, row-major.
///
/// Cell edges are placed proportionally, so any remainder is spread across
/// the grid and the cells always tile the full area. A grid with more rows
/// or columns than the area has character cells produces zero-size rects,
/// which never match a pointer position.
pub fn cell_rects(area: Rect, rows: usize, cols: usize) -> Vec<(CellPos, Rect)> {
    if rows == 0 || cols == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let xs = split_axis(area.x, area.width, cols);
    let ys = split_axis(area.y, area.height, rows);
    let mut rects = Vec::with_capacity(rows * cols);
    for (row, &(y, height)) in ys.iter().enumerate() {
        for (col, &(x, width)) in xs.iter().enumerate() {
            rects.push((CellPos::new(row, col), Rect::new(x, y, width, height)));
        }
    }
    rects
}

/// Proportional edges for one axis: n spans covering [start, start + len).
fn split_axis(start: u16, len: u16, n: usize) -> Vec<(u16, u16)> {
    let mut spans = Vec::with_capacity(n);
    let mut prev = 0u16;
    for i in 1..=n {
        let edge = (u32::from(len) * i as u32 / n as u32) as u16;
        spans.push((start + prev, edge - prev));
        prev = edge;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_cell_affects_row_and_column_union() {
        let mut cells = affected_cells(3, 3, CellPos::new(1, 1));
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellPos::new(0, 1),
                CellPos::new(1, 0),
                CellPos::new(1, 1),
                CellPos::new(1, 2),
                CellPos::new(2, 1),
            ]
        );
    }

    #[test]
    fn corner_cell_affects_first_row_and_first_column() {
        let mut cells = affected_cells(2, 2, CellPos::new(0, 0));
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellPos::new(0, 0),
                CellPos::new(0, 1),
                CellPos::new(1, 0),
            ]
        );
    }

    #[test]
    fn single_cell_grid_affects_only_itself() {
        assert_eq!(affected_cells(1, 1, CellPos::new(0, 0)), vec![CellPos::new(0, 0)]);
    }

    #[test]
    fn out_of_range_position_affects_nothing() {
        assert!(affected_cells(3, 3, CellPos::new(3, 0)).is_empty());
        assert!(affected_cells(3, 3, CellPos::new(0, 7)).is_empty());
        assert!(affected_cells(0, 0, CellPos::new(0, 0)).is_empty());
    }

    #[test]
    fn hovered_cell_listed_once() {
        let cells = affected_cells(4, 5, CellPos::new(2, 3));
        let hits = cells.iter().filter(|p| **p == CellPos::new(2, 3)).count();
        assert_eq!(hits, 1);
        assert_eq!(cells.len(), 5 + 4 - 1);
    }

    #[test]
    fn cell_rects_tile_the_area() {
        let area = Rect::new(2, 3, 31, 10);
        let rects = cell_rects(area, 3, 4);
        assert_eq!(rects.len(), 12);

        // Each row of cells covers the full width with no gaps or overlap
        for row in 0..3 {
            let mut x = area.x;
            for col in 0..4 {
                let rect = rects
                    .iter()
                    .find(|(p, _)| *p == CellPos::new(row, col))
                    .map(|(_, r)| *r)
                    .unwrap();
                assert_eq!(rect.x, x);
                x += rect.width;
            }
            assert_eq!(x, area.x + area.width);
        }

        // Same for columns vertically
        for col in 0..4 {
            let mut y = area.y;
            for row in 0..3 {
                let rect = rects
                    .iter()
                    .find(|(p, _)| *p == CellPos::new(row, col))
                    .map(|(_, r)| *r)
                    .unwrap();
                assert_eq!(rect.y, y);
                y += rect.height;
            }
            assert_eq!(y, area.y + area.height);
        }
    }

    #[test]
    fn cell_rects_empty_inputs() {
        assert!(cell_rects(Rect::new(0, 0, 10, 10), 0, 3).is_empty());
        assert!(cell_rects(Rect::new(0, 0, 10, 10), 3, 0).is_empty());
        assert!(cell_rects(Rect::new(0, 0, 0, 10), 3, 3).is_empty());
    }

    #[test]
    fn oversized_grid_degrades_to_zero_width_cells() {
        let rects = cell_rects(Rect::new(0, 0, 2, 1), 1, 4);
        assert_eq!(rects.len(), 4);
        let total: u16 = rects.iter().map(|(_, r)| r.width).sum();
        assert_eq!(total, 2);
    }
}
