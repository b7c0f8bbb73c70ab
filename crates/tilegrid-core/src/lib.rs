//! **tilegrid-core**: the grid model shared by the tilegrid crates.
//!
//! This crate provides geometry primitives, the capability [`Cell`], the
//! fixed-size [`Grid`] that level loaders fill in and gameplay code queries,
//! and a small text [`Layout`] format for building grids by hand.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use geom::{Aabb, Point, Range, Vec2, grid_aligned, grid_position};
pub use grid::{Grid, GridError};
pub use layout::{Layout, LayoutError};
