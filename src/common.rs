//! Common types for the game core: coordinates, shot outcomes and errors.

use core::fmt;

use crate::game::Mode;

/// A cell position on a board: `col` grows to the right, `row` away from the
/// viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Result of a shot that was actually taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit the ship with the given id without sinking it.
    Hit(usize),
    /// Shot hit the final intact segment of the ship with the given id.
    Sunk(usize),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk(_))
    }

    /// Id of the ship that was struck, if any.
    pub fn ship(&self) -> Option<usize> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) => Some(*id),
        }
    }
}

/// Errors returned by board operations. None of them mutate the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate fell outside the grid.
    OutOfBounds { col: usize, row: usize },
    /// A ship would cover a cell already occupied by another ship.
    Overlap { col: usize, row: usize },
    /// Ships must have a positive length.
    InvalidLength,
    /// The cell was already hit or missed.
    AlreadyTargeted { col: usize, row: usize },
    /// Random placement gave up after the attempt cap.
    PlacementExhausted { length: usize, attempts: usize },
    /// Every cell of the board has already been fired at.
    NoTargetsLeft,
}

impl BoardError {
    /// Whether this error is one of the placement rejections.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds { .. } | BoardError::Overlap { .. } | BoardError::InvalidLength
        )
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { col, row } => {
                write!(f, "cell ({},{}) is outside the board", col, row)
            }
            BoardError::Overlap { col, row } => {
                write!(f, "cell ({},{}) is already occupied by a ship", col, row)
            }
            BoardError::InvalidLength => write!(f, "ship length must be positive"),
            BoardError::AlreadyTargeted { col, row } => {
                write!(f, "cell ({},{}) was already targeted", col, row)
            }
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "could not place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::NoTargetsLeft => write!(f, "no untargeted cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by game actions. The game state is unchanged on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The action is not allowed in the current mode.
    WrongMode { expected: Mode, actual: Mode },
    /// Battle was requested before the whole fleet was placed.
    PrematureStart { next_length: usize },
    /// Every ship of the fleet is already on the board.
    FleetComplete,
    /// A board operation failed.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongMode { expected, actual } => write!(
                f,
                "action requires {} mode but the game is in {} mode",
                expected.name(),
                actual.name()
            ),
            GameError::PrematureStart { next_length } => write!(
                f,
                "place all ships first, next length: {}",
                next_length
            ),
            GameError::FleetComplete => write!(f, "the whole fleet is already placed"),
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
