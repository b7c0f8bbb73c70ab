//! The [`Cell`] type: movement and sight capabilities of one grid square.

/// The state of a single grid square.
///
/// A cell answers two independent questions: can an entity move through it
/// ([`passable`](Cell::passable)) and does it block line of sight
/// ([`opaque`](Cell::opaque)). Collision and pathfinding read the first,
/// visibility reads the second, and both share one grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    passable: bool,
    opaque: bool,
}

impl Cell {
    /// Open ground: walkable and see-through.
    pub const FLOOR: Cell = Cell::new(true, false);
    /// Solid wall: blocks movement and sight.
    pub const WALL: Cell = Cell::new(false, true);
    /// Blocks movement but not sight (glass, railings, chasms).
    pub const WINDOW: Cell = Cell::new(false, false);
    /// Walkable but blocks sight (tall grass, curtains).
    pub const FOLIAGE: Cell = Cell::new(true, true);

    #[inline]
    pub const fn new(passable: bool, opaque: bool) -> Self {
        Self { passable, opaque }
    }

    #[inline]
    pub const fn passable(self) -> bool {
        self.passable
    }

    #[inline]
    pub const fn opaque(self) -> bool {
        self.opaque
    }

    /// Inverse of [`passable`](Cell::passable).
    #[inline]
    pub const fn is_occupied(self) -> bool {
        !self.passable
    }

    /// Set passability (builder).
    #[inline]
    pub const fn with_passable(mut self, passable: bool) -> Self {
        self.passable = passable;
        self
    }

    /// Set opacity (builder).
    #[inline]
    pub const fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Cell::FLOOR
    }
}

/// Plain occupancy flag: `true` is a wall, `false` is floor.
impl From<bool> for Cell {
    #[inline]
    fn from(occupied: bool) -> Self {
        if occupied { Cell::WALL } else { Cell::FLOOR }
    }
}
