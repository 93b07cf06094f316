//! Hover highlighting over the page's elements.
//!
//! The binder registers a rectangular region per interactive element and
//! turns raw pointer positions into enter/leave transitions. The grid half
//! computes which cells share a row or column with a hovered cell, and how
//! a grid area splits into per-cell rectangles. Both the renderer and the
//! binder use the same geometry, so hit-testing and drawing cannot drift
//! apart.

pub mod binder;
pub mod grid;

pub use binder::{HoverBinder, HoverTarget, HoverTransition};
pub use grid::CellPos;
