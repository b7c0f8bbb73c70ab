use tilegrid_core::Point;

/// Cost of an orthogonal move under [`Adjacency::Octile`](crate::Adjacency::Octile).
pub const OCTILE_CARDINAL_COST: i32 = 10;
/// Cost of a diagonal move under [`Adjacency::Octile`](crate::Adjacency::Octile)
/// (≈ 10·√2).
pub const OCTILE_DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: the exact cost of an unobstructed 8-way walk using
/// [`OCTILE_CARDINAL_COST`] and [`OCTILE_DIAGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    OCTILE_CARDINAL_COST * dx.max(dy) + (OCTILE_DIAGONAL_COST - OCTILE_CARDINAL_COST) * dx.min(dy)
}
