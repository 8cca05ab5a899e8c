//! Fixed-step frame driver and the presentation-side seams.

use core::time::Duration;

use crate::config::{MAX_FRAME_TICKS, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, TICK};
use crate::game::Game;
use crate::projection::Point;

/// Implemented by whatever draws the game. Rendering only reads state.
pub trait Renderer {
    fn render(&mut self, game: &Game);
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _game: &Game) {}
}

/// Number of fixed ticks covering `elapsed`, between one and
/// [`MAX_FRAME_TICKS`].
pub fn ticks_for(elapsed: Duration) -> u32 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let steps = libm::round(ms / (TICK * 1000.0));
    if steps < 1.0 {
        1
    } else if steps >= f64::from(MAX_FRAME_TICKS) {
        MAX_FRAME_TICKS
    } else {
        steps as u32
    }
}

impl Game {
    /// Per-frame update. The board game has no continuous simulation, so this
    /// only counts ticks.
    pub fn update(&mut self, _dt: f64) {
        self.ticks += 1;
    }

    /// Advance by `elapsed` in fixed ticks, then render once. Returns the
    /// number of ticks run.
    pub fn advance_time<R: Renderer + ?Sized>(&mut self, elapsed: Duration, renderer: &mut R) -> u32 {
        let steps = ticks_for(elapsed);
        for _ in 0..steps {
            self.update(TICK);
        }
        renderer.render(self);
        steps
    }
}

/// Screen rectangle of the canvas element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Backing size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MIN_CANVAS_WIDTH,
            height: MIN_CANVAS_HEIGHT,
        }
    }
}

impl Viewport {
    /// Canvas size for an element of `css_width`×`css_height` at the given
    /// device pixel ratio, never below the minimum canvas size.
    pub fn fit(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
        let ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        let scale = |css: f64, min: u32| {
            let px = libm::round(css * ratio);
            if px > f64::from(min) {
                px.min(f64::from(u32::MAX)) as u32
            } else {
                min
            }
        };
        Self {
            width: scale(css_width, MIN_CANVAS_WIDTH),
            height: scale(css_height, MIN_CANVAS_HEIGHT),
        }
    }

    /// Convert a pointer position in client coordinates into canvas pixels.
    pub fn to_canvas(&self, client_x: f64, client_y: f64, rect: ClientRect) -> Option<Point> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        Some(Point::new(
            (client_x - rect.left) / rect.width * f64::from(self.width),
            (client_y - rect.top) / rect.height * f64::from(self.height),
        ))
    }
}
