// Uniform-random targeting for the computer opponent and the auto-fire action.

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotOutcome},
    config::{GRID, MAX_AI_ATTEMPTS},
};
use rand::Rng;

/// Pick a uniformly random cell that has not been fired at, by enumerating
/// the open cells. Returns `None` once the board is fully targeted.
pub fn random_untargeted<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let candidates = board.untargeted();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Take one opponent shot at `board`: draw random cells and fire until a
/// shot lands on an untargeted one.
///
/// After [`MAX_AI_ATTEMPTS`] rejected draws the remaining open cells are
/// enumerated instead, so the turn always completes while any remain.
pub fn random_shot<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(Coord, ShotOutcome), BoardError> {
    for _ in 0..MAX_AI_ATTEMPTS {
        let col = rng.random_range(0..GRID);
        let row = rng.random_range(0..GRID);
        match board.fire_at(col, row) {
            Ok(outcome) => return Ok((Coord::new(col, row), outcome)),
            Err(BoardError::AlreadyTargeted { .. }) => {
                log::trace!("ai redraws after ({},{})", col, row);
            }
            Err(e) => return Err(e),
        }
    }
    log::warn!("ai sampling hit {} attempts, enumerating", MAX_AI_ATTEMPTS);
    let target = random_untargeted(board, rng).ok_or(BoardError::NoTargetsLeft)?;
    let outcome = board.fire_at(target.col, target.row)?;
    Ok((target, outcome))
}
