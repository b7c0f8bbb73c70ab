use tilegrid_core::{Grid, Point};

use crate::distance::{self, OCTILE_CARDINAL_COST, OCTILE_DIAGONAL_COST};
use crate::traits::{AstarPather, Pather, WeightedPather};

const CARDINAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

const OCTILE: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
    Point::new(-1, 1),
];

/// Which moves a grid search may take, together with their costs and the
/// matching heuristic.
///
/// Step costs and heuristic come as a pair: each variant's estimate is
/// admissible and consistent for its own moves only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// 4-way orthogonal moves, each costing 1. Heuristic: Manhattan.
    #[default]
    Cardinal,
    /// 8-way moves: orthogonal cost [`OCTILE_CARDINAL_COST`], diagonal cost
    /// [`OCTILE_DIAGONAL_COST`]. Heuristic: octile distance. A diagonal move
    /// is only taken when both orthogonal cells it squeezes past are
    /// passable.
    Octile,
}

impl Adjacency {
    /// Offsets from a cell to its candidate neighbors.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Octile => &OCTILE,
        }
    }

    /// Cost of a single move by offset `d`.
    #[inline]
    pub fn step_cost(self, d: Point) -> i32 {
        match self {
            Self::Cardinal => 1,
            Self::Octile if d.x != 0 && d.y != 0 => OCTILE_DIAGONAL_COST,
            Self::Octile => OCTILE_CARDINAL_COST,
        }
    }

    /// Heuristic estimate from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Self::Cardinal => distance::manhattan(from, to),
            Self::Octile => distance::octile(from, to),
        }
    }
}

/// [`AstarPather`] over the passable cells of a [`Grid`].
///
/// Only cells inside the grid are walkable: out-of-range reads report
/// passable, so without the bounds filter an unreachable goal would let the
/// search wander off the grid forever.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    adjacency: Adjacency,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, adjacency: Adjacency) -> Self {
        Self { grid, adjacency }
    }

    #[inline]
    fn walkable(&self, p: Point) -> bool {
        self.grid.contains(p) && self.grid.is_passable(p)
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for &d in self.adjacency.offsets() {
            let n = p + d;
            if !self.walkable(n) {
                continue;
            }
            let diagonal = d.x != 0 && d.y != 0;
            if diagonal && !(self.walkable(p.shift(d.x, 0)) && self.walkable(p.shift(0, d.y))) {
                continue;
            }
            buf.push(n);
        }
    }
}

impl WeightedPather for GridPather<'_> {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> i32 {
        self.adjacency.step_cost(to - from)
    }
}

impl AstarPather for GridPather<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self.adjacency.estimate(from, to)
    }
}
