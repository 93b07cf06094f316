//! Pointer tracking over registered regions.

use ratatui::layout::{Position, Rect};

use super::grid::CellPos;

/// A page element the pointer can hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// The demo paragraph.
    Paragraph,
    /// One cell of the hover grid.
    Cell(CellPos),
}

/// A hover state change produced by a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Enter(HoverTarget),
    Leave(HoverTarget),
}

/// Maps raw pointer positions to enter/leave transitions over registered
/// regions.
///
/// Regions are rebuilt whenever the terminal is resized; the page geometry
/// is a pure function of the terminal area, so the same rectangles drive
/// drawing and hit-testing. The binder only remembers which target the
/// pointer is currently over. What a transition does to the page is the
/// event handler's business.
///
/// Transitions derive solely from observed pointer positions. When the
/// pointer leaves the terminal window without a final move event inside it,
/// no leave fires and any applied highlight stays put until the next
/// observed move.
#[derive(Debug, Default)]
pub struct HoverBinder {
    regions: Vec<(Rect, HoverTarget)>,
    current: Option<HoverTarget>,
}

impl HoverBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all registered regions. The current hover target is kept;
    /// the next pointer move reconciles it against the new geometry.
    pub fn set_regions(&mut self, regions: Vec<(Rect, HoverTarget)>) {
        self.regions = regions;
    }

    /// The target the pointer was last observed over, if any.
    pub fn current(&self) -> Option<HoverTarget> {
        self.current
    }

    /// Feed an observed pointer position. Returns the transitions that fire,
    /// the leave for the old target before the enter for the new one. With
    /// no registered regions every move is a silent no-op.
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> Vec<HoverTransition> {
        let next = self.hit(Position::new(column, row));
        if next == self.current {
            return Vec::new();
        }
        let mut transitions = Vec::with_capacity(2);
        if let Some(old) = self.current {
            transitions.push(HoverTransition::Leave(old));
        }
        if let Some(new) = next {
            transitions.push(HoverTransition::Enter(new));
        }
        self.current = next;
        transitions
    }

    /// First registered region containing the position wins.
    fn hit(&self, pos: Position) -> Option<HoverTarget> {
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binder() -> HoverBinder {
        let mut b = HoverBinder::new();
        b.set_regions(vec![
            (Rect::new(0, 0, 10, 2), HoverTarget::Paragraph),
            (Rect::new(0, 2, 5, 2), HoverTarget::Cell(CellPos::new(0, 0))),
            (Rect::new(5, 2, 5, 2), HoverTarget::Cell(CellPos::new(0, 1))),
        ]);
        b
    }

    #[test]
    fn entering_a_region_fires_enter() {
        let mut b = binder();
        assert_eq!(
            b.pointer_moved(3, 1),
            vec![HoverTransition::Enter(HoverTarget::Paragraph)]
        );
        assert_eq!(b.current(), Some(HoverTarget::Paragraph));
    }

    #[test]
    fn moving_within_a_region_is_silent() {
        let mut b = binder();
        b.pointer_moved(3, 1);
        assert!(b.pointer_moved(4, 0).is_empty());
        assert_eq!(b.current(), Some(HoverTarget::Paragraph));
    }

    #[test]
    fn moving_between_cells_fires_leave_then_enter() {
        let mut b = binder();
        b.pointer_moved(1, 3);
        assert_eq!(
            b.pointer_moved(6, 3),
            vec![
                HoverTransition::Leave(HoverTarget::Cell(CellPos::new(0, 0))),
                HoverTransition::Enter(HoverTarget::Cell(CellPos::new(0, 1))),
            ]
        );
    }

    #[test]
    fn leaving_all_regions_fires_leave_only() {
        let mut b = binder();
        b.pointer_moved(1, 3);
        assert_eq!(
            b.pointer_moved(50, 20),
            vec![HoverTransition::Leave(HoverTarget::Cell(CellPos::new(0, 0)))]
        );
        assert_eq!(b.current(), None);
    }

    #[test]
    fn moves_outside_all_regions_are_silent() {
        let mut b = binder();
        assert!(b.pointer_moved(50, 20).is_empty());
        assert!(b.pointer_moved(51, 20).is_empty());
    }

    #[test]
    fn empty_binder_ignores_all_moves() {
        let mut b = HoverBinder::new();
        assert!(b.pointer_moved(0, 0).is_empty());
        assert!(b.pointer_moved(3, 1).is_empty());
        assert_eq!(b.current(), None);
    }

    #[test]
    fn rebuilding_regions_keeps_current_until_next_move() {
        let mut b = binder();
        b.pointer_moved(3, 1);
        b.set_regions(Vec::new());
        assert_eq!(b.current(), Some(HoverTarget::Paragraph));
        assert_eq!(
            b.pointer_moved(3, 1),
            vec![HoverTransition::Leave(HoverTarget::Paragraph)]
        );
    }
}
