//! Text layouts: build a [`Grid`] from a block of characters.
//!
//! Each line of the text is one grid row, the first line being `y = 0`.
//! The default legend is:
//!
//! | Char | Cell |
//! |---|---|
//! | `.` or space | [`Cell::FLOOR`] |
//! | `#` | [`Cell::WALL`] |
//! | `=` | [`Cell::WINDOW`] |
//! | `%` | [`Cell::FOLIAGE`] |
//!
//! ```
//! use tilegrid_core::{Cell, Layout, Point};
//!
//! let grid = Layout::parse("###\n#.=\n").unwrap();
//! assert_eq!(grid.get(Point::new(1, 1)), Cell::FLOOR);
//! assert_eq!(grid.get(Point::new(2, 1)), Cell::WINDOW);
//! ```

use std::fmt;

use crate::cell::Cell;
use crate::geom::Point;
use crate::grid::Grid;

/// Parser for text layouts.
pub struct Layout;

impl Layout {
    /// Parse `s` with the default legend.
    pub fn parse(s: &str) -> Result<Grid, LayoutError> {
        Self::parse_with(s, default_legend)
    }

    /// Parse `s`, mapping each character to a cell with `legend`.
    ///
    /// Characters for which `legend` returns `None` are rejected. Trailing
    /// empty lines are ignored.
    pub fn parse_with(s: &str, legend: impl Fn(char) -> Option<Cell>) -> Result<Grid, LayoutError> {
        let lines: Vec<&str> = s.trim_end_matches(['\n', '\r']).lines().collect();
        let width = match lines.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(LayoutError::Empty),
        };

        let mut grid = Grid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let cell = legend(ch).ok_or(LayoutError::InvalidChar { ch, pos })?;
                grid.set(pos, cell);
            }
        }
        Ok(grid)
    }
}

/// Default character for a cell, the inverse of the default legend.
pub fn cell_char(cell: Cell) -> char {
    match (cell.passable(), cell.opaque()) {
        (true, false) => '.',
        (false, true) => '#',
        (false, false) => '=',
        (true, true) => '%',
    }
}

fn default_legend(ch: char) -> Option<Cell> {
    match ch {
        '.' | ' ' => Some(Cell::FLOOR),
        '#' => Some(Cell::WALL),
        '=' => Some(Cell::WINDOW),
        '%' => Some(Cell::FOLIAGE),
        _ => None,
    }
}

/// Renders the grid with the default legend, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", cell_char(self.get(Point::new(x, y))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The text contains no rows, or the first row is blank.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character the legend does not know.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid char \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
