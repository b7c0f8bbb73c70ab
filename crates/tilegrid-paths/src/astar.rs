use std::collections::{BinaryHeap, HashMap};

use tilegrid_core::{Grid, Point};

use crate::neighbors::{Adjacency, GridPather};
use crate::search::{Expansion, OpenEntry, PathError, PathResult, Step, reconstruct};
use crate::traits::AstarPather;

/// A* search configuration.
///
/// `PathFinder` holds no search state: every call builds its own open set,
/// closed set and step arena and drops them on return, so one finder can be
/// shared freely and a search can be abandoned at any point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFinder {
    adjacency: Adjacency,
    budget: Option<usize>,
}

impl PathFinder {
    /// A finder using 4-way movement and no expansion budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement policy used by [`get_path`](PathFinder::get_path)
    /// (builder).
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Give up with [`PathError::BudgetExhausted`] once `max_expansions`
    /// steps have been expanded without reaching the goal (builder).
    pub fn with_budget(mut self, max_expansions: usize) -> Self {
        self.budget = Some(max_expansions);
        self
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    /// Shortest path between two cells of `grid` under the configured
    /// adjacency.
    ///
    /// Both endpoints must lie inside the grid. The start cell itself is not
    /// required to be passable; every other cell of the path is.
    pub fn get_path(&self, grid: &Grid, from: Point, to: Point) -> Result<PathResult, PathError> {
        if !grid.contains(from) || !grid.contains(to) {
            log::debug!("path {from} -> {to}: endpoint outside {} grid", grid.bounds());
            return Err(PathError::NotFound);
        }
        self.find_path(&GridPather::new(grid, self.adjacency), from, to)
    }

    /// Shortest path from `from` to `to` over any [`AstarPather`].
    pub fn find_path<P: AstarPather>(
        &self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<PathResult, PathError> {
        self.find_path_inspect(pather, from, to, |_| {})
    }

    /// Like [`find_path`](PathFinder::find_path), calling `inspect` for
    /// every step taken off the open set, in pop order.
    pub fn find_path_inspect<P: AstarPather>(
        &self,
        pather: &P,
        from: Point,
        to: Point,
        mut inspect: impl FnMut(&Expansion),
    ) -> Result<PathResult, PathError> {
        let mut arena: Vec<Step> = Vec::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        // Point -> arena index of its live open step. Heap entries not
        // listed here have been superseded and are skipped when popped.
        let mut open_index: HashMap<Point, usize> = HashMap::new();
        let mut closed: HashMap<Point, usize> = HashMap::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(8);
        let mut expanded = 0;

        let start = Step {
            pos: from,
            g: 0,
            priority: pather.estimate(from, to),
            parent: None,
        };
        arena.push(start);
        open.push(OpenEntry {
            step: 0,
            priority: start.priority,
        });
        open_index.insert(from, 0);

        while let Some(entry) = open.pop() {
            let ci = entry.step;
            let current = arena[ci];
            if open_index.get(&current.pos) != Some(&ci) {
                continue;
            }
            open_index.remove(&current.pos);
            expanded += 1;
            inspect(&Expansion {
                pos: current.pos,
                g: current.g,
                priority: current.priority,
            });

            if current.pos == to {
                let path = reconstruct(&arena, ci);
                log::debug!(
                    "path {from} -> {to}: {} moves, cost {}, {expanded} expanded",
                    path.len() - 1,
                    current.g
                );
                return Ok(PathResult {
                    path,
                    cost: current.g,
                    expanded,
                });
            }

            if self.budget.is_some_and(|max| expanded >= max) {
                log::warn!("path {from} -> {to}: budget exhausted after {expanded} expansions");
                return Err(PathError::BudgetExhausted { expanded });
            }

            closed.insert(current.pos, ci);

            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);
            for &np in nbuf.iter() {
                let cost = current.g + pather.cost(current.pos, np);

                if let Some(&oi) = open_index.get(&np) {
                    if arena[oi].g <= cost {
                        continue;
                    }
                    open_index.remove(&np);
                }
                if let Some(&ki) = closed.get(&np) {
                    if arena[ki].g <= cost {
                        continue;
                    }
                    closed.remove(&np);
                }

                let step = Step {
                    pos: np,
                    g: cost,
                    priority: cost + pather.estimate(np, to),
                    parent: Some(ci),
                };
                let si = arena.len();
                arena.push(step);
                open.push(OpenEntry {
                    step: si,
                    priority: step.priority,
                });
                open_index.insert(np, si);
            }
        }

        log::debug!("path {from} -> {to}: not found, {expanded} expanded");
        Err(PathError::NotFound)
    }
}

/// Shortest 4-way path between two cells of `grid`.
///
/// Shorthand for `PathFinder::default().get_path(grid, from, to)` keeping
/// only the points.
pub fn get_path(grid: &Grid, from: Point, to: Point) -> Result<Vec<Point>, PathError> {
    PathFinder::default()
        .get_path(grid, from, to)
        .map(|r| r.path)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_round_trip() {
        let finder = PathFinder::new()
            .with_adjacency(Adjacency::Octile)
            .with_budget(500);
        let json = serde_json::to_string(&finder).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, finder);
    }

    #[test]
    fn path_result_round_trip() {
        let grid = Grid::new(4, 4);
        let r = PathFinder::new()
            .get_path(&grid, Point::new(0, 3), Point::new(2, 1))
            .unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
