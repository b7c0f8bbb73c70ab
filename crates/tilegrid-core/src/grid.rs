//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s.
//!
//! Storage is row-major: the cell at `(x, y)` lives at index
//! `y * width + x`. There is no y-inversion; row `y = 0` is both the first
//! stored row and the row covering world `y ∈ [0, block_size)`.
//!
//! Every query is total. Coordinates outside the grid read as
//! [`Cell::default()`] and writes to them are ignored, so level-loading and
//! gameplay code never has to range-check first.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range, Vec2, grid_position};

/// A fixed-size 2D grid of [`Cell`]s with an associated world-space cell size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData")
)]
pub struct Grid {
    width: i32,
    height: i32,
    block_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell cleared to
    /// [`Cell::default()`] and a block size of `1.0`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            block_size: 1.0,
            cells: vec![Cell::default(); w as usize * h as usize],
        }
    }

    /// Set the number of world units covered by one cell (builder).
    pub fn with_block_size(mut self, block_size: f32) -> Self {
        self.block_size = block_size;
        self
    }

    /// World units per cell along each axis.
    #[inline]
    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// [`block_size`](Grid::block_size) as a per-axis vector.
    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        Vec2::splat(self.block_size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    // -----------------------------------------------------------------------
    // Index mapping
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or `None` when `p` lies outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Grid::index).
    #[inline]
    pub fn point(&self, i: usize) -> Option<Point> {
        if i >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((i % w) as i32, (i / w) as i32))
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Read the cell at `p`. Returns `Cell::default()` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Cell {
        self.index(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Read the cell at flat index `i`. Returns `Cell::default()` when
    /// `i >= len()`.
    #[inline]
    pub fn get_index(&self, i: usize) -> Cell {
        self.cells.get(i).copied().unwrap_or_default()
    }

    /// Write the cell at `p`. No-op outside the grid.
    pub fn set(&mut self, p: Point, cell: impl Into<Cell>) {
        match self.index(p) {
            Some(i) => self.cells[i] = cell.into(),
            None => log::trace!("ignoring set at {p} outside {}x{} grid", self.width, self.height),
        }
    }

    /// Write the cell at flat index `i`. No-op when `i >= len()`.
    pub fn set_index(&mut self, i: usize, cell: impl Into<Cell>) {
        match self.cells.get_mut(i) {
            Some(c) => *c = cell.into(),
            None => log::trace!("ignoring set at index {i} past {} cells", self.cells.len()),
        }
    }

    /// Whether an entity may occupy `p`.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.get(p).passable()
    }

    /// Whether `p` blocks line of sight.
    #[inline]
    pub fn is_opaque(&self, p: Point) -> bool {
        self.get(p).opaque()
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: impl Into<Cell>) {
        let cell = cell.into();
        self.cells.fill(cell);
    }

    /// Fill the part of `rng` that lies inside the grid.
    pub fn fill_range(&mut self, rng: Range, cell: impl Into<Cell>) {
        let cell = cell.into();
        for p in rng.intersect(self.bounds()) {
            if let Some(i) = self.index(p) {
                self.cells[i] = cell;
            }
        }
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, mut pred: impl FnMut(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    // -----------------------------------------------------------------------
    // World space
    // -----------------------------------------------------------------------

    /// World position of the minimum corner of cell `p`.
    #[inline]
    pub fn to_world(&self, p: Point) -> Vec2 {
        Vec2::new(p.x as f32 * self.block_size, p.y as f32 * self.block_size)
    }

    /// Cell containing world position `v`. The result may lie outside the
    /// grid.
    #[inline]
    pub fn to_cell(&self, v: Vec2) -> Point {
        Point::new(
            grid_position(v.x, self.block_size),
            grid_position(v.y, self.block_size),
        )
    }
}

// ---------------------------------------------------------------------------
// GridError / serde support
// ---------------------------------------------------------------------------

/// Errors raised when building a grid from raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The cell vector length disagrees with `width * height`.
    CellCount { expected: usize, found: usize },
    /// Width or height is negative.
    NegativeSize(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCount { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::NegativeSize(size) => write!(f, "grid: negative size {size}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Unvalidated grid fields, as found in serialized data.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    width: i32,
    height: i32,
    block_size: f32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        if data.width < 0 || data.height < 0 {
            return Err(GridError::NegativeSize(Point::new(data.width, data.height)));
        }
        let expected = data.width as usize * data.height as usize;
        if data.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: data.cells.len(),
            });
        }
        Ok(Grid {
            width: data.width,
            height: data.height,
            block_size: data.block_size,
            cells: data.cells,
        })
    }
}
