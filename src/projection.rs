//! Axonometric world→screen projection.
//!
//! Boards live on the world `x`/`y` plane with `z` pointing up. The camera is
//! fixed: world axes are sheared onto the screen diagonals and height is
//! subtracted from screen `y`. The map is affine, so straight edges stay
//! straight and a square cell becomes a parallelogram on screen.

use crate::config::{CAMERA, CELL, MIN_CANVAS_WIDTH};

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point on the drawing surface, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Oblique camera constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Horizontal scale applied to `x - y`.
    pub yaw: f64,
    /// Vertical scale applied to `(x + y) / 2`.
    pub pitch: f64,
    /// Screen pixels per unit of height.
    pub height_scale: f64,
}

/// A camera bound to a canvas width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    camera: Camera,
    half_width: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(CAMERA, f64::from(MIN_CANVAS_WIDTH))
    }
}

impl Projector {
    pub fn new(camera: Camera, canvas_width: f64) -> Self {
        Self {
            camera,
            half_width: canvas_width / 2.0,
        }
    }

    /// Projector with the standard camera for a canvas `canvas_width` pixels wide.
    pub fn for_canvas(canvas_width: u32) -> Self {
        Self::new(CAMERA, f64::from(canvas_width))
    }

    pub fn canvas_width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Map a world point to the screen.
    pub fn project(&self, world: Vec3) -> Point {
        let px = world.x - world.y;
        let py = (world.x + world.y) * 0.5;
        Point {
            x: px * self.camera.yaw + self.half_width,
            y: py * self.camera.pitch - world.z * self.camera.height_scale,
        }
    }
}

/// Convert a grid position plus height into world space for the board
/// anchored at `origin`. Rows run towards negative world `y`.
///
/// `col` and `row` may be fractional to address points inside a cell.
pub fn board_to_world(origin: Vec3, col: f64, row: f64, height: f64) -> Vec3 {
    Vec3 {
        x: origin.x + col * CELL,
        y: origin.y - row * CELL,
        z: origin.z + height,
    }
}
