#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ai;
mod board;
mod common;
mod config;
pub mod frame;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod picker;
#[cfg(feature = "std")]
pub mod player_cli;
pub mod prelude;
pub mod projection;
mod ship;
pub mod snapshot;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use frame::{NullRenderer, Renderer, Viewport};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use picker::pick_cell;
pub use projection::{board_to_world, Camera, Point, Projector, Vec3};
pub use ship::*;
pub use snapshot::GameSnapshot;
