#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use isobattle::{
    init_logging, pick_cell, player_cli::run_console, player_cli::Console, Game, Mode, Projector,
    Viewport, ENEMY_ORIGIN, PLAYER_ORIGIN,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Isometric Battleship against a random-firing computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum BoardSide {
    Player,
    Enemy,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Auto-place the fleet and auto-fire until the game ends, then print the
    /// final state as JSON.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Resolve a canvas pixel to a board cell.
    Pick {
        #[arg(long, value_enum, default_value_t = BoardSide::Player)]
        board: BoardSide,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, help = "Canvas width in pixels (minimum 960)")]
        width: Option<u32>,
    },
    /// Play interactively with text commands on stdin.
    Console {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Canvas width in pixels (minimum 960)")]
        width: Option<u32>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn projector(width: Option<u32>) -> Projector {
    let viewport = Viewport::fit(f64::from(width.unwrap_or(0)), 0.0, 1.0);
    Projector::for_canvas(viewport.width)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let mut game = Game::new(&mut rng)?;
            game.auto_place(&mut rng)?;
            game.start_battle()?;
            while game.mode() == Mode::Battle {
                game.auto_fire(&mut rng)?;
            }
            println!("{}", game.snapshot().to_json()?);
        }
        Commands::Pick { board, x, y, width } => {
            let origin = match board {
                BoardSide::Player => PLAYER_ORIGIN,
                BoardSide::Enemy => ENEMY_ORIGIN,
            };
            match pick_cell(&projector(width), origin, x, y) {
                Some(cell) => println!("{} {}", cell.col, cell.row),
                None => println!("none"),
            }
        }
        Commands::Console { seed, width } => {
            let mut console = Console::new(make_rng(seed), projector(width))?;
            let stdin = std::io::stdin();
            run_console(&mut console, stdin.lock(), std::io::stdout().lock())?;
        }
    }
    Ok(())
}
