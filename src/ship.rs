//! Ship classes and placed ships.

use alloc::vec::Vec;

use crate::common::{BoardError, Coord};
use crate::config::GRID;

/// Axis a ship extends along from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Extends towards larger columns.
    Horizontal,
    /// Extends towards larger rows.
    #[default]
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Compute the cells a ship of `length` would cover from `(col, row)`.
///
/// Fails with [`BoardError::OutOfBounds`] on the first cell that leaves the
/// grid; occupancy is not checked here.
pub fn footprint(
    col: usize,
    row: usize,
    length: usize,
    orientation: Orientation,
) -> Result<Vec<Coord>, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidLength);
    }
    let mut cells = Vec::with_capacity(length);
    for i in 0..length {
        let (c, r) = match orientation {
            Orientation::Horizontal => (col + i, row),
            Orientation::Vertical => (col, row + i),
        };
        if c >= GRID || r >= GRID {
            return Err(BoardError::OutOfBounds { col: c, row: r });
        }
        cells.push(Coord::new(c, r));
    }
    Ok(cells)
}

/// A ship placed on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    hits: usize,
}

impl Ship {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Self { cells, hits: 0 }
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.length()
    }

    /// Covered cells in order from the origin.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn orientation(&self) -> Orientation {
        match self.cells.as_slice() {
            [a, b, ..] if a.row == b.row => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }

    pub(crate) fn register_hit(&mut self) -> bool {
        self.hits += 1;
        self.is_sunk()
    }
}
