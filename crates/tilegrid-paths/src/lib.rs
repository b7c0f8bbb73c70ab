//! A* shortest-path search on tilegrid grids.
//!
//! The common case is a single call:
//!
//! ```
//! use tilegrid_core::{Grid, Point};
//!
//! let grid = Grid::new(5, 5);
//! let path = tilegrid_paths::get_path(&grid, Point::new(0, 0), Point::new(3, 0)).unwrap();
//! assert_eq!(path.len(), 4);
//! ```
//!
//! [`PathFinder`] adds an explicit movement policy ([`Adjacency`]) and an
//! optional expansion budget for callers that must bound the time spent in
//! one frame. Any graph can be searched by implementing the pather traits.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimate |

mod astar;
mod distance;
mod neighbors;
mod search;
mod traits;

pub use astar::{PathFinder, get_path};
pub use distance::{OCTILE_CARDINAL_COST, OCTILE_DIAGONAL_COST, manhattan, octile};
pub use neighbors::{Adjacency, GridPather};
pub use search::{Expansion, PathError, PathResult};
pub use traits::{AstarPather, Pather, WeightedPather};
