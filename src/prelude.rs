//! Commonly used types and utilities for ease of import.

pub use crate::{
    board_to_world, pick_cell, Board, BoardError, Coord, Game, GameError, Mode, Orientation,
    Projector, ShotOutcome, Side, Vec3, ENEMY_ORIGIN, FLEET_LENGTHS, GRID, PLAYER_ORIGIN,
};

#[cfg(feature = "std")]
pub use crate::player_cli::{run_console, Console};
