// cell.rs - Grid coordinates for Conway's Game of Life

use std::fmt;

use crate::error::{Error, Result};

/// Neighbor offsets, clockwise from the top-left corner.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1), (1, 0),
    (1, 1),   (0, 1),  (-1, 1), (-1, 0),
];

/// One grid square. The origin is the top-left corner, so both
/// components are non-negative.
///
/// Ordering is row-major (`y` first, then `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Signed coordinates, rejected when either component is negative
    /// or does not fit the grid.
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(Error::InvalidCoordinate { x, y }),
        }
    }

    /// The cell at `(dx, dy)` from this one, or `None` past the origin
    /// (or past `u32::MAX`).
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// The in-bounds neighbors of this cell. A cell on the top or left
    /// edge has fewer than eight.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl TryFrom<(i64, i64)> for Cell {
    type Error = Error;

    fn try_from((x, y): (i64, i64)) -> Result<Self> {
        Self::try_new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
