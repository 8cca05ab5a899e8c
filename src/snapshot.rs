//! Read-only view of a game for external consumers.
//!
//! The enemy summary never lists ship cells, only hit/miss cells, so an
//! unsunk enemy ship cannot be located from a snapshot.

use alloc::{string::String, vec::Vec};

use crate::{board::Board, common::Coord, game::Game};

const COORDINATE_SYSTEM: &str = "Grid coordinates: origin=(0,0) at each board near viewer-left edge, \
col right, row away/up board.";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipSummary {
    pub length: usize,
    pub hits: usize,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub cells: Option<Vec<Coord>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardSummary {
    pub remaining_health: usize,
    pub ships: Vec<ShipSummary>,
    pub hit_cells: Vec<Coord>,
    pub miss_cells: Vec<Coord>,
}

impl BoardSummary {
    /// Summarize `board`, listing ship cells only when `reveal` is set.
    pub fn of(board: &Board, reveal: bool) -> Self {
        let ships = board
            .ships()
            .iter()
            .map(|ship| ShipSummary {
                length: ship.length(),
                hits: ship.hits(),
                cells: reveal.then(|| ship.cells().to_vec()),
            })
            .collect();
        Self {
            remaining_health: board.remaining_health(),
            ships,
            hit_cells: board.hit_cells(),
            miss_cells: board.miss_cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacementInfo {
    pub next_ship_length: Option<usize>,
    pub orientation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotCounts {
    pub player: usize,
    pub ai: usize,
}

/// Full game state as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub coordinate_system: &'static str,
    pub mode: &'static str,
    pub message: String,
    pub placement: PlacementInfo,
    pub player: BoardSummary,
    pub enemy: BoardSummary,
    pub shots: ShotCounts,
    pub winner: Option<&'static str>,
}

#[cfg(feature = "std")]
impl GameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Game {
    /// Capture the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            coordinate_system: COORDINATE_SYSTEM,
            mode: self.mode().name(),
            message: String::from(self.message()),
            placement: PlacementInfo {
                next_ship_length: self.next_length(),
                orientation: self.orientation().name(),
            },
            player: BoardSummary::of(self.player_board(), true),
            enemy: BoardSummary::of(self.enemy_board(), false),
            shots: ShotCounts {
                player: self.player_shots(),
                ai: self.ai_shots(),
            },
            winner: self.winner().map(|side| side.name()),
        }
    }
}
