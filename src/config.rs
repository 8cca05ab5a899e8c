use crate::projection::{Camera, Vec3};
use crate::ship::ShipClass;

/// Width and height of each board, in cells.
pub const GRID: usize = 10;

/// Edge length of one cell in world units.
pub const CELL: f64 = 22.0;

pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Lengths of [`FLEET`], in the same order.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// World-space anchor of the player's board (left, nearer the viewer).
pub const PLAYER_ORIGIN: Vec3 = Vec3::new(120.0, 480.0, 0.0);

/// World-space anchor of the enemy's board.
pub const ENEMY_ORIGIN: Vec3 = Vec3::new(620.0, 260.0, 0.0);

pub const CAMERA: Camera = Camera {
    yaw: 0.84,
    pitch: 0.88,
    height_scale: 4.25,
};

/// Height of a cell's top face above the board plane.
pub const TILE_HEIGHT: f64 = 8.0;

pub const MIN_CANVAS_WIDTH: u32 = 960;
pub const MIN_CANVAS_HEIGHT: u32 = 620;

/// Fixed simulation step, in seconds.
pub const TICK: f64 = 1.0 / 60.0;

/// Most fixed ticks a single frame advance will run (ten seconds).
pub const MAX_FRAME_TICKS: u32 = 600;

/// Upper bound on rejection-sampling attempts per ship during random placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 4096;

/// Upper bound on rejection-sampling attempts for a single AI shot.
pub const MAX_AI_ATTEMPTS: usize = 4096;
