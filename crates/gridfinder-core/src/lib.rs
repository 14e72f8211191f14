//! **gridfinder-core** — geometry primitives for 4-connected search grids.
//!
//! Positions are addressed as `(row, col)`, rows growing downwards and
//! columns growing to the right.

pub mod geom;

pub use geom::{Pos, Rect, RectIter};
