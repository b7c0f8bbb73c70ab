use tilegrid_core::Point;

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append the points reachable in one move from `p` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`.
    ///
    /// Must never overestimate the true cost (admissible). If it is also
    /// consistent (`estimate(a, t) <= cost(a, b) + estimate(b, t)` for every
    /// edge), no settled step is ever reopened.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
