use std::cmp::Ordering;
use std::fmt;

use tilegrid_core::Point;

// ---------------------------------------------------------------------------
// Per-search arena records
// ---------------------------------------------------------------------------

/// A search node. Lives in the arena of a single search; `parent` indexes
/// into that same arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    pub(crate) pos: Point,
    pub(crate) g: i32,
    pub(crate) priority: i32,
    pub(crate) parent: Option<usize>,
}

/// Heap entry referring to a [`Step`] in the arena, ordered by priority.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) step: usize,
    pub(crate) priority: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest priority first.
        // The arena index only keeps the order total; callers must not rely
        // on how equal priorities are ordered.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.step.cmp(&self.step))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Follow parent links from `last` back to the root and return the points
/// in root-to-`last` order.
pub(crate) fn reconstruct(arena: &[Step], last: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(last);
    while let Some(i) = cur {
        path.push(arena[i].pos);
        cur = arena[i].parent;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Public results
// ---------------------------------------------------------------------------

/// A step taken off the open set and expanded, reported in pop order by
/// [`PathFinder::find_path_inspect`](crate::PathFinder::find_path_inspect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub pos: Point,
    /// Cost from the start.
    pub g: i32,
    /// `g` plus the heuristic estimate to the goal.
    pub priority: i32,
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Points from start to goal, both included.
    pub path: Vec<Point>,
    /// Total cost of `path` under the pather's edge costs.
    pub cost: i32,
    /// Number of steps taken off the open set.
    pub expanded: usize,
}

impl PathResult {
    /// Number of moves in the path (one less than the number of points).
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Errors returned by a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The open set ran empty without reaching the goal.
    NotFound,
    /// The configured expansion budget ran out first.
    BudgetExhausted { expanded: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no path found"),
            Self::BudgetExhausted { expanded } => {
                write!(f, "path search gave up after expanding {expanded} steps")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn open_entries_pop_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        for (step, priority) in [(0, 7), (1, 3), (2, 9), (3, 3), (4, 5)] {
            heap.push(OpenEntry { step, priority });
        }
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop()).map(|e| e.priority).collect();
        assert_eq!(order, vec![3, 3, 5, 7, 9]);
    }

    #[test]
    fn reconstruct_follows_parents() {
        let step = |x, parent| Step {
            pos: Point::new(x, 0),
            g: x,
            priority: x,
            parent,
        };
        let arena = vec![step(0, None), step(5, None), step(1, Some(0)), step(2, Some(2))];
        assert_eq!(
            reconstruct(&arena, 3),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(reconstruct(&arena, 0), vec![Point::new(0, 0)]);
    }

    #[test]
    fn path_error_display() {
        assert_eq!(PathError::NotFound.to_string(), "no path found");
        assert!(
            PathError::BudgetExhausted { expanded: 12 }
                .to_string()
                .contains("12")
        );
    }
}
