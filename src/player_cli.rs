#![cfg(feature = "std")]

//! Line-oriented input adapter. Each line maps to one of the actions the
//! graphical front end binds to mouse clicks and keys.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::{
    config::{ENEMY_ORIGIN, PLAYER_ORIGIN},
    frame::Renderer,
    game::{Game, Mode},
    picker::pick_cell,
    projection::Projector,
    ui::TextRenderer,
    GameError,
};

/// One console command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer click at canvas pixel coordinates.
    Click { x: f64, y: f64 },
    /// Place the next ship at a cell of the player board.
    Place { col: usize, row: usize },
    /// Fire at a cell of the enemy board.
    Fire { col: usize, row: usize },
    Rotate,
    AutoPlace,
    Start,
    /// Fire at a random untargeted enemy cell.
    AutoFire,
    Reset,
    State,
    Tick { ms: u64 },
    Help,
    Quit,
}

const HELP: &str = "commands: click X Y | place C R | fire C R | rotate | auto | start | \
space | reset | state | tick MS | help | quit";

fn arg<T: std::str::FromStr>(parts: &[&str], i: usize, what: &str) -> Result<T, String> {
    let raw = parts
        .get(i)
        .ok_or_else(|| format!("missing {}", what))?;
    raw.parse()
        .map_err(|_| format!("invalid {} '{}'", what, raw))
}

/// Parse one input line. Empty lines yield `Ok(None)`.
pub fn parse_action(line: &str) -> Result<Option<Action>, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(cmd) = parts.first() else {
        return Ok(None);
    };
    let action = match cmd.to_ascii_lowercase().as_str() {
        "click" => Action::Click {
            x: arg(&parts, 1, "x")?,
            y: arg(&parts, 2, "y")?,
        },
        "place" => Action::Place {
            col: arg(&parts, 1, "column")?,
            row: arg(&parts, 2, "row")?,
        },
        "fire" => Action::Fire {
            col: arg(&parts, 1, "column")?,
            row: arg(&parts, 2, "row")?,
        },
        "r" | "rotate" => Action::Rotate,
        "a" | "auto" => Action::AutoPlace,
        "start" | "enter" => Action::Start,
        "space" | "autofire" => Action::AutoFire,
        "reset" => Action::Reset,
        "state" => Action::State,
        "tick" => Action::Tick {
            ms: arg(&parts, 1, "milliseconds")?,
        },
        "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(Some(action))
}

/// Game plus the pieces needed to turn raw input into game actions.
pub struct Console {
    game: Game,
    projector: Projector,
    rng: SmallRng,
}

impl Console {
    pub fn new(mut rng: SmallRng, projector: Projector) -> Result<Self, GameError> {
        let game = Game::new(&mut rng)?;
        Ok(Self {
            game,
            projector,
            rng,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Route a canvas click to the board that is active in the current mode.
    /// Clicks that miss the board are ignored.
    pub fn click(&mut self, x: f64, y: f64) -> Result<(), GameError> {
        match self.game.mode() {
            Mode::Placing => match pick_cell(&self.projector, PLAYER_ORIGIN, x, y) {
                Some(cell) => self.game.place_next(cell.col, cell.row).map(|_| ()),
                None => Ok(()),
            },
            Mode::Battle => match pick_cell(&self.projector, ENEMY_ORIGIN, x, y) {
                Some(cell) => self.game.fire(cell.col, cell.row, &mut self.rng).map(|_| ()),
                None => Ok(()),
            },
            Mode::GameOver(_) => Ok(()),
        }
    }

    /// Apply one action, rendering through `renderer` afterwards. Returns the
    /// text to print for the action, if any.
    pub fn apply<R: Renderer + ?Sized>(
        &mut self,
        action: Action,
        renderer: &mut R,
    ) -> Result<Option<String>, GameError> {
        let mut reply = None;
        match action {
            Action::Click { x, y } => self.click(x, y)?,
            Action::Place { col, row } => {
                self.game.place_next(col, row)?;
            }
            Action::Fire { col, row } => {
                self.game.fire(col, row, &mut self.rng)?;
            }
            Action::Rotate => {
                self.game.rotate()?;
            }
            Action::AutoPlace => self.game.auto_place(&mut self.rng)?,
            Action::Start => self.game.start_battle()?,
            Action::AutoFire => {
                self.game.auto_fire(&mut self.rng)?;
            }
            Action::Reset => self.game.reset(&mut self.rng)?,
            Action::State => {
                let json = self
                    .game
                    .snapshot()
                    .to_json()
                    .unwrap_or_else(|e| format!("snapshot error: {}", e));
                return Ok(Some(json));
            }
            Action::Tick { ms } => {
                let steps = self.game.advance_time(Duration::from_millis(ms), renderer);
                return Ok(Some(format!("advanced {} ticks", steps)));
            }
            Action::Help => reply = Some(String::from(HELP)),
            Action::Quit => {}
        }
        renderer.render(&self.game);
        Ok(reply)
    }
}

/// Read commands from `input` until end of input or `quit`, printing boards
/// and replies to `output`.
pub fn run_console<I: BufRead, O: Write>(
    console: &mut Console,
    input: I,
    mut output: O,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.render(console.game());
    flush_frame(renderer, &mut output)?;
    for line in input.lines() {
        let line = line?;
        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        if action == Action::Quit {
            break;
        }
        let mut renderer = TextRenderer::new(Vec::new());
        match console.apply(action, &mut renderer) {
            Ok(Some(reply)) => writeln!(output, "{}", reply)?,
            Ok(None) => {}
            Err(e) => {
                log::debug!("rejected {:?}: {}", action, e);
                writeln!(output, "{}", console.game().message())?;
            }
        }
        flush_frame(renderer, &mut output)?;
    }
    output.flush()
}

fn flush_frame<O: Write>(mut renderer: TextRenderer<Vec<u8>>, output: &mut O) -> io::Result<()> {
    if let Some(e) = renderer.take_error() {
        return Err(e);
    }
    output.write_all(&renderer.into_inner())
}
