//! Axis-separated collision resolution for boxes moving over a grid.
//!
//! A move is resolved one axis at a time, X first and then Y using the
//! already-corrected X displacement. A diagonal move into a wall therefore
//! loses only the component pointing into the wall and slides along it.

use std::ops::RangeInclusive;

use tilegrid_core::{Aabb, Grid, Point, Vec2, grid_position};

/// Amount a box is shrunk on each side before testing which cells it covers.
/// An edge lying exactly on a cell boundary does not count as touching the
/// cell beyond it, so a box resting flush against a wall can still slide.
pub const FUDGE: f32 = 0.001;

/// Inclusive span of cell indices covered by `[min, max]` along one axis.
#[inline]
fn span(min: f32, max: f32, size: f32) -> (i32, i32) {
    (grid_position(min + FUDGE, size), grid_position(max - FUDGE, size))
}

/// Cell lines `lo..=hi` restricted to `[0, limit)`. Lines outside the grid
/// hold no occupied cells.
#[inline]
fn in_grid(lo: i32, hi: i32, limit: i32) -> RangeInclusive<i32> {
    lo.max(0)..=hi.min(limit - 1)
}

/// Clip a displacement `d` of the interval `[min, max]` along one axis.
///
/// `blocked(i)` reports whether cell line `i` (a column for X, a row for Y)
/// holds an occupied cell anywhere across the box. Every line inside
/// `[0, limit)` between the box's current leading edge and its target leading
/// edge is tested, nearest first, and the move stops flush against the first
/// blocked one.
fn clip_axis(
    min: f32,
    max: f32,
    d: f32,
    size: f32,
    limit: i32,
    blocked: impl Fn(i32) -> bool,
) -> f32 {
    if d > 0.0 {
        let first = grid_position(max - FUDGE, size).saturating_add(1);
        let last = grid_position(max + d - FUDGE, size);
        in_grid(first, last, limit)
            .find(|&i| blocked(i))
            .map_or(d, |i| (i as f32 * size - max).clamp(0.0, d))
    } else if d < 0.0 {
        let first = grid_position(min + FUDGE, size).saturating_sub(1);
        let last = grid_position(min + d + FUDGE, size);
        in_grid(last, first, limit)
            .rev()
            .find(|&i| blocked(i))
            .map_or(d, |i| ((i + 1) as f32 * size - min).clamp(d, 0.0))
    } else {
        d
    }
}

/// Correct the displacement `mv` of the box `bounds` so that it does not
/// move into occupied cells of `grid`.
///
/// `cell_size` is the world size of one cell along each axis. Each axis
/// travels as far as it can and stops with the box's leading edge exactly on
/// the boundary of the first occupied cell in its way. Cells the box already
/// overlaps do not stop it, so an entity stuck in a wall can walk out.
///
/// Cells outside the grid are open ground.
pub fn fix_move(grid: &Grid, bounds: Aabb, mv: Vec2, cell_size: Vec2) -> Vec2 {
    let occupied = |x: i32, y: i32| grid.get(Point::new(x, y)).is_occupied();
    let (width, height) = (grid.width(), grid.height());

    let (row_lo, row_hi) = span(bounds.min.y, bounds.max.y, cell_size.y);
    let dx = clip_axis(bounds.min.x, bounds.max.x, mv.x, cell_size.x, width, |col| {
        in_grid(row_lo, row_hi, height).any(|row| occupied(col, row))
    });

    let moved = bounds.translate(Vec2::new(dx, 0.0));
    let (col_lo, col_hi) = span(moved.min.x, moved.max.x, cell_size.x);
    let dy = clip_axis(bounds.min.y, bounds.max.y, mv.y, cell_size.y, height, |row| {
        in_grid(col_lo, col_hi, width).any(|col| occupied(col, row))
    });

    let out = Vec2::new(dx, dy);
    if out != mv {
        log::trace!("move {mv} of box at {} clipped to {out}", bounds.min);
    }
    out
}

/// [`fix_move`] using the grid's own [`cell_size`](Grid::cell_size).
pub fn fix_move_on(grid: &Grid, bounds: Aabb, mv: Vec2) -> Vec2 {
    fix_move(grid, bounds, mv, grid.cell_size())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tilegrid_core::{Cell, Range};

    use super::*;

    const UNIT: Vec2 = Vec2::splat(1.0);

    fn unit_box(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_origin_size(Vec2::new(x, y), Vec2::splat(size))
    }

    /// 10x6 grid with a solid wall column at `x = col`.
    fn wall_column(col: i32) -> Grid {
        let mut g = Grid::new(10, 6);
        g.fill_range(Range::new(col, 0, col + 1, 6), Cell::WALL);
        g
    }

    #[test]
    fn unobstructed_move_is_unchanged() {
        let g = Grid::new(10, 10);
        let b = unit_box(3.25, 3.25, 0.5);
        let mv = Vec2::new(0.3, -0.2);
        assert_eq!(fix_move(&g, b, mv, UNIT), mv);
        assert_eq!(fix_move(&g, b, Vec2::ZERO, UNIT), Vec2::ZERO);
    }

    #[test]
    fn stops_flush_moving_right() {
        let g = wall_column(5);
        let b = unit_box(1.25, 1.25, 0.5);
        let out = fix_move(&g, b, Vec2::new(5.0, 0.0), UNIT);
        assert_eq!(out, Vec2::new(3.25, 0.0));
        assert_eq!(b.max.x + out.x, 5.0);
    }

    #[test]
    fn stops_flush_moving_left() {
        let g = wall_column(0);
        let b = Aabb::new(Vec2::new(2.5, 1.25), Vec2::new(3.0, 1.75));
        let out = fix_move(&g, b, Vec2::new(-5.0, 0.0), UNIT);
        assert_eq!(out, Vec2::new(-1.5, 0.0));
        assert_eq!(b.min.x + out.x, 1.0);
    }

    #[test]
    fn stops_flush_on_floor() {
        let mut g = Grid::new(6, 6);
        g.fill_range(Range::new(0, 4, 6, 5), Cell::WALL);
        let b = Aabb::new(Vec2::new(1.25, 3.0), Vec2::new(1.75, 3.5));
        let out = fix_move(&g, b, Vec2::new(1.0, 2.0), UNIT);
        assert_eq!(out, Vec2::new(1.0, 0.5));
        assert_eq!(b.max.y + out.y, 4.0);
    }

    #[test]
    fn diagonal_move_slides_along_wall() {
        let g = wall_column(5);
        let b = unit_box(1.25, 1.25, 0.5);
        let out = fix_move(&g, b, Vec2::new(4.0, 1.0), UNIT);
        assert_eq!(out, Vec2::new(3.25, 1.0));
    }

    #[test]
    fn flush_box_does_not_stick() {
        let g = wall_column(5);
        let b = Aabb::new(Vec2::new(4.5, 1.25), Vec2::new(5.0, 1.75));
        assert_eq!(fix_move(&g, b, Vec2::new(0.0, 1.0), UNIT), Vec2::new(0.0, 1.0));
        assert_eq!(fix_move(&g, b, Vec2::new(-1.0, 0.0), UNIT), Vec2::new(-1.0, 0.0));
        assert_eq!(fix_move(&g, b, Vec2::new(0.5, 0.0), UNIT), Vec2::ZERO);
    }

    #[test]
    fn long_move_does_not_tunnel() {
        let g = wall_column(3);
        let b = unit_box(0.25, 0.25, 0.5);
        let out = fix_move(&g, b, Vec2::new(10.0, 0.0), UNIT);
        assert_eq!(out.x, 2.25);
    }

    #[test]
    fn windows_block_and_foliage_does_not() {
        let mut g = Grid::new(8, 3);
        g.set(Point::new(3, 1), Cell::FOLIAGE);
        g.set(Point::new(5, 1), Cell::WINDOW);
        let b = unit_box(1.25, 1.25, 0.5);
        let out = fix_move(&g, b, Vec2::new(6.0, 0.0), UNIT);
        assert_eq!(b.max.x + out.x, 5.0);
    }

    #[test]
    fn large_cells_and_large_box() {
        let mut g = Grid::new(8, 4).with_block_size(16.0);
        g.set(Point::new(4, 1), Cell::WALL);
        let b = Aabb::new(Vec2::new(10.0, 16.0), Vec2::new(30.0, 30.0));
        let out = fix_move_on(&g, b, Vec2::new(40.0, 0.0));
        assert_eq!(out, Vec2::new(34.0, 0.0));
        assert_eq!(b.max.x + out.x, 64.0);
    }

    #[test]
    fn per_axis_cell_size() {
        let mut g = Grid::new(6, 6);
        g.set(Point::new(2, 1), Cell::WALL);
        // Cells are 2 wide and 1 tall: the wall spans x ∈ [4, 6), y ∈ [1, 2).
        let b = Aabb::new(Vec2::new(0.5, 1.25), Vec2::new(1.5, 1.75));
        let out = fix_move(&g, b, Vec2::new(4.0, 0.0), Vec2::new(2.0, 1.0));
        assert_eq!(out.x, 2.5);
    }

    #[test]
    fn embedded_box_can_walk_out() {
        let mut g = Grid::new(6, 3);
        g.set(Point::new(2, 1), Cell::WALL);
        let b = unit_box(2.25, 1.25, 0.5);
        assert_eq!(fix_move(&g, b, Vec2::new(1.0, 0.0), UNIT), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn huge_move_on_open_grid_is_unchanged() {
        let g = Grid::new(10, 10);
        let b = unit_box(1.25, 1.25, 0.5);
        for mv in [
            Vec2::new(1.0e9, 0.0),
            Vec2::new(-1.0e9, 0.0),
            Vec2::new(0.0, 1.0e9),
            Vec2::new(-1.0e9, -1.0e9),
        ] {
            assert_eq!(fix_move(&g, b, mv, UNIT), mv);
        }
    }

    #[test]
    fn huge_move_still_stops_at_wall() {
        let g = wall_column(5);
        let b = unit_box(1.25, 1.25, 0.5);
        let out = fix_move(&g, b, Vec2::new(1.0e9, 0.0), UNIT);
        assert_eq!(b.max.x + out.x, 5.0);
    }

    #[test]
    fn far_off_grid_box_moves_freely() {
        let mut g = Grid::new(4, 4);
        g.fill(Cell::WALL);
        let b = Aabb::new(Vec2::new(-3.0e9, 2.0e9), Vec2::new(-2.0e9, 3.0e9));
        let mv = Vec2::new(5.0e8, -5.0e8);
        assert_eq!(fix_move(&g, b, mv, UNIT), mv);
    }

    #[test]
    fn random_moves_never_enter_walls() {
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = Grid::new(10, 10);
            for p in g.bounds() {
                if rng.random_bool(0.35) {
                    g.set(p, Cell::WALL);
                }
            }
            for _ in 0..40 {
                let cell = Point::new(rng.random_range(0..10), rng.random_range(0..10));
                if g.get(cell).is_occupied() {
                    continue;
                }
                let jitter = Vec2::new(rng.random_range(0.0..0.5), rng.random_range(0.0..0.5));
                let origin = g.to_world(cell) + jitter;
                let b = Aabb::from_origin_size(origin, Vec2::splat(0.5));
                let mv = Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
                let out = fix_move(&g, b, mv, UNIT);

                assert!(
                    out.x.abs() <= mv.x.abs() && out.x * mv.x >= 0.0,
                    "seed {seed}: {mv} -> {out}"
                );
                assert!(
                    out.y.abs() <= mv.y.abs() && out.y * mv.y >= 0.0,
                    "seed {seed}: {mv} -> {out}"
                );
                let moved = b.translate(out);
                let (x0, x1) = span(moved.min.x, moved.max.x, 1.0);
                let (y0, y1) = span(moved.min.y, moved.max.y, 1.0);
                for x in x0..=x1 {
                    for y in y0..=y1 {
                        assert!(
                            !g.get(Point::new(x, y)).is_occupied(),
                            "seed {seed}: box {b:?} moved {out} overlaps ({x}, {y})\n{g}"
                        );
                    }
                }
            }
        }
    }
}
