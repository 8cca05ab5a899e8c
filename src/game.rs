//! Game state machine: placement, battle and game over for one human player
//! against the computer.

use alloc::{format, string::String, vec::Vec};
use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{BoardError, Coord, GameError, ShotOutcome},
    config::{FLEET, FLEET_LENGTHS, NUM_SHIPS},
    ship::{Orientation, ShipClass},
};

/// Either participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }
}

/// Phase of the game. Only moves forward, except through [`Game::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Placing,
    Battle,
    GameOver(Side),
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Placing => "placing",
            Mode::Battle => "battle",
            Mode::GameOver(_) => "gameover",
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Mode::GameOver(side) => Some(side),
            _ => None,
        }
    }
}

/// Outcome of one completed player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Enemy cell the player fired at.
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// The computer's answering shot, absent when the player's shot ended
    /// the game.
    pub reply: Option<(Coord, ShotOutcome)>,
}

/// Cells the next ship would cover with the current orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPreview {
    pub length: usize,
    pub cells: Vec<Coord>,
    /// `false` when any cell is already occupied.
    pub valid: bool,
}

const PLACE_PROMPT: &str =
    "Place ship length 5 on your board (left). Press R to rotate or A to auto-place.";

/// The complete state of one game.
#[derive(Debug, Clone)]
pub struct Game {
    player: Board,
    enemy: Board,
    mode: Mode,
    placed: usize,
    orientation: Orientation,
    player_shots: usize,
    ai_shots: usize,
    message: String,
    pub(crate) ticks: u64,
}

impl Game {
    /// Start a fresh game in placement mode with a randomly placed enemy
    /// fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut enemy = Board::new();
        enemy.auto_place_fleet(rng, &FLEET_LENGTHS)?;
        Ok(Self {
            player: Board::new(),
            enemy,
            mode: Mode::Placing,
            placed: 0,
            orientation: Orientation::Vertical,
            player_shots: 0,
            ai_shots: 0,
            message: String::from(PLACE_PROMPT),
            ticks: 0,
        })
    }

    /// Discard everything and start over. The game is untouched on error.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let ticks = self.ticks;
        *self = Self::new(rng)?;
        self.ticks = ticks;
        log::info!("game reset");
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn winner(&self) -> Option<Side> {
        self.mode.winner()
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of fleet ships placed on the player board so far.
    pub fn placement_progress(&self) -> usize {
        self.placed
    }

    /// Length of the next ship to place, or `None` once the fleet is down.
    pub fn next_length(&self) -> Option<usize> {
        self.next_class().map(|class| class.length())
    }

    /// Class of the next ship to place.
    pub fn next_class(&self) -> Option<ShipClass> {
        FLEET.get(self.placed).copied()
    }

    pub fn player_shots(&self) -> usize {
        self.player_shots
    }

    pub fn ai_shots(&self) -> usize {
        self.ai_shots
    }

    /// Fixed-step updates run since the game was created.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn require(&self, expected: Mode) -> Result<(), GameError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(GameError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }

    fn set_message(&mut self, message: String) {
        log::debug!("status: {}", message);
        self.message = message;
    }

    /// Flip the orientation used for the next placement.
    pub fn rotate(&mut self) -> Result<Orientation, GameError> {
        self.require(Mode::Placing)?;
        self.orientation = self.orientation.toggled();
        self.set_message(format!("Rotation: {}.", self.orientation.name()));
        Ok(self.orientation)
    }

    /// What placing the next ship at `(col, row)` would cover. `None` when
    /// not placing, when the fleet is complete, or when the ship would leave
    /// the grid.
    pub fn placement_preview(&self, col: usize, row: usize) -> Option<PlacementPreview> {
        if self.mode != Mode::Placing {
            return None;
        }
        let length = self.next_length()?;
        match self.player.check_placement(col, row, length, self.orientation) {
            Ok(cells) => Some(PlacementPreview {
                length,
                cells,
                valid: true,
            }),
            Err(BoardError::Overlap { .. }) => {
                let cells = crate::ship::footprint(col, row, length, self.orientation).ok()?;
                Some(PlacementPreview {
                    length,
                    cells,
                    valid: false,
                })
            }
            Err(_) => None,
        }
    }

    /// Place the next ship of the fleet at `(col, row)` with the current
    /// orientation. Returns the new ship's id.
    pub fn place_next(&mut self, col: usize, row: usize) -> Result<usize, GameError> {
        self.require(Mode::Placing)?;
        let Some(class) = self.next_class() else {
            self.set_message(String::from(
                "Fleet already placed. Click Start Battle or press Enter.",
            ));
            return Err(GameError::FleetComplete);
        };
        let length = class.length();
        let id = match self.player.place_ship(col, row, length, self.orientation) {
            Ok(id) => id,
            Err(e) => {
                self.set_message(format!(
                    "Cannot place {} (length {}) there.",
                    class.name(),
                    length
                ));
                return Err(e.into());
            }
        };
        self.placed += 1;
        let message = match self.next_length() {
            Some(next) => format!(
                "Placed. Next ship length {} ({}).",
                next,
                self.orientation.name()
            ),
            None => String::from("Fleet ready. Click Start Battle."),
        };
        self.set_message(message);
        Ok(id)
    }

    /// Replace the player's board with a randomly placed full fleet.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.require(Mode::Placing)?;
        let mut board = Board::new();
        board.auto_place_fleet(rng, &FLEET_LENGTHS)?;
        self.player = board;
        self.placed = NUM_SHIPS;
        self.set_message(String::from(
            "Fleet auto-placed. Click Start Battle or press Enter.",
        ));
        Ok(())
    }

    /// Move from placement to battle once the whole fleet is placed.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.require(Mode::Placing)?;
        if let Some(next_length) = self.next_length() {
            self.set_message(format!(
                "Place all ships first. Next length: {}.",
                next_length
            ));
            return Err(GameError::PrematureStart { next_length });
        }
        self.mode = Mode::Battle;
        self.set_message(String::from("Battle started. Fire on the right board."));
        log::info!("battle started");
        Ok(())
    }

    /// Fire at the enemy cell `(col, row)`, then let the computer answer
    /// unless the shot won the game.
    ///
    /// A repeat shot is rejected without consuming a turn.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        col: usize,
        row: usize,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        self.require(Mode::Battle)?;
        let outcome = match self.enemy.fire_at(col, row) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.set_message(String::from(match e {
                    BoardError::AlreadyTargeted { .. } => "You already fired there.",
                    _ => "That cell is outside the enemy board.",
                }));
                return Err(e.into());
            }
        };
        self.player_shots += 1;
        self.set_message(String::from(match outcome {
            ShotOutcome::Sunk(_) => "Direct hit. Enemy ship sunk.",
            ShotOutcome::Hit(_) => "Direct hit.",
            ShotOutcome::Miss => "Miss.",
        }));
        let target = Coord::new(col, row);

        if self.enemy.all_sunk() {
            self.mode = Mode::GameOver(Side::Player);
            self.set_message(String::from("Victory. Enemy fleet destroyed."));
            log::info!("player wins after {} shots", self.player_shots);
            return Ok(TurnReport {
                target,
                outcome,
                reply: None,
            });
        }

        let reply = self.ai_turn(rng)?;
        Ok(TurnReport {
            target,
            outcome,
            reply: Some(reply),
        })
    }

    /// Fire at a uniformly random enemy cell that has not been targeted yet.
    pub fn auto_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport, GameError> {
        self.require(Mode::Battle)?;
        let target = ai::random_untargeted(&self.enemy, rng).ok_or(BoardError::NoTargetsLeft)?;
        self.fire(target.col, target.row, rng)
    }

    fn ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Coord, ShotOutcome), GameError> {
        let (coord, outcome) = ai::random_shot(&mut self.player, rng)?;
        self.ai_shots += 1;
        let suffix = match outcome {
            ShotOutcome::Sunk(_) => " AI sunk one of your ships.",
            ShotOutcome::Hit(_) => " AI hit your ship.",
            ShotOutcome::Miss => " and missed.",
        };
        self.set_message(if outcome.is_hit() {
            format!("Enemy fired at {}.{}", coord, suffix)
        } else {
            format!("Enemy fired at {}{}", coord, suffix)
        });

        if self.player.all_sunk() {
            self.mode = Mode::GameOver(Side::Enemy);
            self.set_message(String::from(
                "Defeat. All your ships were sunk. Press Reset to retry.",
            ));
            log::info!("enemy wins after {} shots", self.ai_shots);
        }
        Ok((coord, outcome))
    }
}
