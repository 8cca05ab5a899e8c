#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io;

use crate::{board::Board, config::GRID, frame::Renderer, game::Game, game::Mode, game::Side};

/// Draw one board as a text grid. Rows are printed far to near so the
/// layout matches the on-screen orientation (row 0 nearest the viewer).
pub fn board_text(board: &Board, reveal: bool, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {} (health {})", title, board.remaining_health());
    for row in (0..GRID).rev() {
        let _ = write!(out, "  {:2} ", row);
        for col in 0..GRID {
            let ch = match board.cell(crate::Coord::new(col, row)) {
                Some(cell) if cell.hit() => 'X',
                Some(cell) if cell.miss() => 'o',
                Some(cell) if reveal && cell.has_ship() => 'S',
                _ => '~',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out.push_str("     ");
    for col in 0..GRID {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');
    out
}

/// Both boards and the status line.
pub fn game_text(game: &Game) -> String {
    let reveal_enemy = game.mode() == Mode::GameOver(Side::Enemy);
    let mut out = String::new();
    out.push_str(&board_text(game.player_board(), true, "Your Fleet"));
    out.push_str(&board_text(game.enemy_board(), reveal_enemy, "Enemy Waters"));
    let next = game
        .next_length()
        .map_or_else(|| String::from("none"), |n| n.to_string());
    let _ = writeln!(
        out,
        "Mode: {} | Shots You: {} AI: {} | Next ship: {} | Orientation: {}",
        game.mode().name(),
        game.player_shots(),
        game.ai_shots(),
        next,
        game.orientation().name()
    );
    let _ = writeln!(out, "{}", game.message());
    out
}

/// [`Renderer`] writing [`game_text`] to any writer.
pub struct TextRenderer<W: io::Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: io::Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// First write error seen, if any. Rendering stops after an error.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Renderer for TextRenderer<W> {
    fn render(&mut self, game: &Game) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(game_text(game).as_bytes()) {
            self.error = Some(e);
        }
    }
}
