//! Spatial queries over a [`Grid`](tilegrid_core::Grid) in world units.
//!
//! - [`collision`] clips the movement of an axis-aligned box so it never
//!   enters an occupied cell.
//! - [`visibility`] answers whether two positions can see each other
//!   through transparent cells.
//!
//! Both take world-space positions and map them onto cells with a per-axis
//! cell size, or with the grid's own block size via the `_on` variants.
//!
//! ```
//! use tilegrid_core::{Aabb, Layout, Vec2};
//! use tilegrid_spatial::{can_see_on, fix_move_on};
//!
//! let grid = Layout::parse("\
//! .....
//! ..#..
//! .....").unwrap();
//!
//! let player = Aabb::from_origin_size(Vec2::new(0.25, 1.25), Vec2::splat(0.5));
//! let mv = fix_move_on(&grid, player, Vec2::new(3.0, 0.0));
//! assert_eq!(mv, Vec2::new(1.25, 0.0));
//!
//! assert!(!can_see_on(&grid, Vec2::new(0.5, 1.5), Vec2::new(4.5, 1.5)));
//! assert!(can_see_on(&grid, Vec2::new(0.5, 0.5), Vec2::new(4.5, 0.5)));
//! ```

pub mod collision;
pub mod visibility;

pub use collision::{FUDGE, fix_move, fix_move_on};
pub use visibility::{can_see, can_see_on, line_of_sight};
