//! Line-of-sight queries.
//!
//! The line between two cells is walked twice: once per column, picking the
//! row the line passes through, and once per row, picking the column. The
//! second pass catches the cells a single pass would skip on steep or
//! shallow lines.

use tilegrid_core::{Grid, Point, Vec2, grid_position};

/// Whether an unobstructed straight line joins world positions `from` and
/// `to`.
///
/// Both positions are mapped to cells using `cell_size`, then tested with
/// [`line_of_sight`].
pub fn can_see(grid: &Grid, from: Vec2, to: Vec2, cell_size: Vec2) -> bool {
    let a = Point::new(grid_position(from.x, cell_size.x), grid_position(from.y, cell_size.y));
    let b = Point::new(grid_position(to.x, cell_size.x), grid_position(to.y, cell_size.y));
    line_of_sight(grid, a, b)
}

/// [`can_see`] using the grid's own [`cell_size`](Grid::cell_size).
pub fn can_see_on(grid: &Grid, from: Vec2, to: Vec2) -> bool {
    can_see(grid, from, to, grid.cell_size())
}

/// Whether no opaque cell lies strictly between cells `a` and `b`.
///
/// The endpoint cells themselves never block: a viewer standing in foliage
/// still sees out, and a target hugging a wall is still seen. Cells outside
/// the grid are transparent, so only the columns and rows inside the grid are
/// scanned.
pub fn line_of_sight(grid: &Grid, a: Point, b: Point) -> bool {
    let blocks = |p: Point| p != a && p != b && grid.is_opaque(p);
    let mut cols = a.x.min(b.x).max(0)..=a.x.max(b.x).min(grid.width() - 1);
    let mut rows = a.y.min(b.y).max(0)..=a.y.max(b.y).min(grid.height() - 1);

    // Vertical and horizontal lines have no usable slope (or no usable
    // inverse slope) and cover a single column or row.
    if a.x == b.x {
        return !rows.any(|y| blocks(Point::new(a.x, y)));
    }
    if a.y == b.y {
        return !cols.any(|x| blocks(Point::new(x, a.y)));
    }

    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let slope = (f64::from(b.y) - ay) / (f64::from(b.x) - ax);
    let c = ay - slope * ax;

    let by_column = cols.any(|x| {
        let y = (slope * f64::from(x) + c).round() as i32;
        blocks(Point::new(x, y))
    });
    if by_column {
        return false;
    }
    let by_row = rows.any(|y| {
        let x = ((f64::from(y) - c) / slope).round() as i32;
        blocks(Point::new(x, y))
    });
    !by_row
}
