//! Board state: the grid of cells, the placed ships and remaining health.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{GRID, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{footprint, Orientation, Ship};

/// Shot result recorded on a cell. Once set it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mark {
    #[default]
    Open,
    Hit,
    Miss,
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    ship: Option<usize>,
    mark: Mark,
}

impl Cell {
    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    /// Index of the occupying ship in [`Board::ships`].
    pub fn ship_id(&self) -> Option<usize> {
        self.ship
    }

    pub fn hit(&self) -> bool {
        self.mark == Mark::Hit
    }

    pub fn miss(&self) -> bool {
        self.mark == Mark::Miss
    }

    pub fn targeted(&self) -> bool {
        self.mark != Mark::Open
    }
}

/// One side's 10×10 grid and fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    ships: Vec<Ship>,
    remaining: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships, no shots).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::default(); GRID]; GRID],
            ships: Vec::new(),
            remaining: 0,
        }
    }

    /// Cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord.row).and_then(|row| row.get(coord.col))
    }

    /// Ships in placement order; the index is the ship id.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: usize) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Sum of unhit segments over all ships.
    pub fn remaining_health(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..GRID).flat_map(|row| (0..GRID).map(move |col| Coord::new(col, row)))
    }

    pub fn hit_cells(&self) -> Vec<Coord> {
        Self::coords().filter(|&c| self.cells[c.row][c.col].hit()).collect()
    }

    pub fn miss_cells(&self) -> Vec<Coord> {
        Self::coords().filter(|&c| self.cells[c.row][c.col].miss()).collect()
    }

    /// Cells not yet hit or missed.
    pub fn untargeted(&self) -> Vec<Coord> {
        Self::coords()
            .filter(|&c| !self.cells[c.row][c.col].targeted())
            .collect()
    }

    /// Check a placement without performing it, returning the covered cells.
    pub fn check_placement(
        &self,
        col: usize,
        row: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, BoardError> {
        let cells = footprint(col, row, length, orientation)?;
        if let Some(taken) = cells.iter().find(|c| self.cells[c.row][c.col].has_ship()) {
            return Err(BoardError::Overlap {
                col: taken.col,
                row: taken.row,
            });
        }
        Ok(cells)
    }

    /// Place a ship of `length` with its origin at `(col, row)`.
    ///
    /// Returns the new ship's id. On error the board is unchanged.
    pub fn place_ship(
        &mut self,
        col: usize,
        row: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<usize, BoardError> {
        let cells = self.check_placement(col, row, length, orientation)?;
        let id = self.ships.len();
        for c in &cells {
            self.cells[c.row][c.col].ship = Some(id);
        }
        self.ships.push(Ship::new(cells));
        self.remaining += length;
        log::debug!(
            "placed ship #{} length {} at ({},{}) {}",
            id,
            length,
            col,
            row,
            orientation.name()
        );
        Ok(id)
    }

    /// Place one ship per entry of `lengths`, in order, at uniformly random
    /// origins and orientations, retrying each until it fits.
    ///
    /// Ships placed before a [`BoardError::PlacementExhausted`] stay on the
    /// board.
    pub fn auto_place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        for &length in lengths {
            self.random_place(rng, length)?;
        }
        Ok(())
    }

    fn random_place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<usize, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let orientation = Orientation::from_horizontal(rng.random_bool(0.5));
            let col = rng.random_range(0..GRID);
            let row = rng.random_range(0..GRID);
            match self.place_ship(col, row, length, orientation) {
                Ok(id) => {
                    log::trace!("length {} fitted after {} attempts", length, attempt);
                    return Ok(id);
                }
                Err(e) if e.is_invalid_placement() => continue,
                Err(e) => return Err(e),
            }
        }
        log::warn!(
            "gave up placing length {} after {} attempts",
            length,
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::PlacementExhausted {
            length,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Fire at `(col, row)`. Each cell can be fired at once; a repeat shot is
    /// rejected with [`BoardError::AlreadyTargeted`] and changes nothing.
    pub fn fire_at(&mut self, col: usize, row: usize) -> Result<ShotOutcome, BoardError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { col, row })?;
        if cell.targeted() {
            return Err(BoardError::AlreadyTargeted { col, row });
        }
        let Some(id) = cell.ship else {
            cell.mark = Mark::Miss;
            log::debug!("shot at ({},{}) missed", col, row);
            return Ok(ShotOutcome::Miss);
        };
        cell.mark = Mark::Hit;
        let ship = &mut self.ships[id];
        let sunk = ship.register_hit();
        self.remaining -= 1;
        log::debug!(
            "shot at ({},{}) hit ship #{}{}",
            col,
            row,
            id,
            if sunk { " and sank it" } else { "" }
        );
        Ok(if sunk {
            ShotOutcome::Sunk(id)
        } else {
            ShotOutcome::Hit(id)
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ remaining: {}, ships: {:?} }}", self.remaining, self.ships)?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match (cell.mark, cell.has_ship()) {
                    (Mark::Hit, _) => 'X',
                    (Mark::Miss, _) => 'o',
                    (Mark::Open, true) => 'S',
                    (Mark::Open, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
