//! Optimal move selection via minimax with alpha-beta pruning.
//!
//! Every empty cell is scored by placing the engine's mark there and
//! searching the rest of the game with the opponent to move. Terminal
//! positions score `10 - depth` for an engine win, `depth - 10` for an
//! opponent win and `0` for a draw, so faster wins and slower losses are
//! preferred. Ties for the best score are broken uniformly at random with a
//! caller-supplied RNG.

use crate::error::EngineError;
use crate::rules::{is_full, winning_line};
use crate::{Board, Player, Position};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

/// Score of an immediate win. Each ply of depth costs one point.
pub const WIN_SCORE: i32 = 10;

/// Scores every legal move for `engine` on `board`.
///
/// Moves are returned in index order. Each score is exact: every root
/// child is searched with a full alpha-beta window.
///
/// # Errors
///
/// `PreconditionViolated` if `engine == opponent` or the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(
    board: &Board,
    engine: Player,
    opponent: Player,
) -> Result<Vec<(Position, i32)>, EngineError> {
    check_preconditions(board, engine, opponent)?;

    let scores = Position::valid_moves(board)
        .into_iter()
        .map(|pos| {
            let child = board.with_mark(pos, engine);
            let score = minimax(&child, 0, false, engine, opponent, i32::MIN, i32::MAX);
            trace!(position = pos.to_index(), score, "Scored root move");
            (pos, score)
        })
        .collect();

    Ok(scores)
}

/// Returns the optimal cell for `engine`, choosing uniformly among ties.
///
/// The board is only read; the search works on copies.
///
/// # Errors
///
/// `PreconditionViolated` if `engine == opponent` or the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    engine: Player,
    opponent: Player,
    rng: &mut R,
) -> Result<Position, EngineError> {
    let scores = score_moves(board, engine, opponent)?;

    let best = scores
        .iter()
        .map(|(_, score)| *score)
        .max()
        .ok_or_else(|| EngineError::precondition("no empty square to play"))?;
    let ties: Vec<Position> = scores
        .iter()
        .filter(|(_, score)| *score == best)
        .map(|(pos, _)| *pos)
        .collect();

    let chosen = *ties
        .choose(rng)
        .ok_or_else(|| EngineError::precondition("no empty square to play"))?;

    debug!(
        position = chosen.to_index(),
        score = best,
        ties = ties.len(),
        "Engine chose move"
    );
    Ok(chosen)
}

fn check_preconditions(board: &Board, engine: Player, opponent: Player) -> Result<(), EngineError> {
    if engine == opponent {
        return Err(EngineError::precondition(format!(
            "engine and opponent both play {engine}"
        )));
    }
    if is_full(board) {
        return Err(EngineError::precondition("board is full"));
    }
    Ok(())
}

/// Alpha-beta search. `maximizing` is true when the engine is to move.
fn minimax(
    board: &Board,
    depth: i32,
    maximizing: bool,
    engine: Player,
    opponent: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match winning_line(board) {
        Some((winner, _)) if winner == engine => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None if is_full(board) => return 0,
        None => {}
    }

    let (mover, mut best) = if maximizing {
        (engine, i32::MIN)
    } else {
        (opponent, i32::MAX)
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let child = board.with_mark(pos, mover);
        let score = minimax(&child, depth + 1, !maximizing, engine, opponent, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// A move oracle that owns its tie-breaking RNG.
///
/// Seed it for reproducible play, or draw from OS entropy.
#[derive(Debug, Clone)]
pub struct MoveOracle<R = SmallRng> {
    rng: R,
}

impl MoveOracle<SmallRng> {
    /// Oracle with a deterministic tie-break sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Oracle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> MoveOracle<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Optimal move for `engine` against its opponent.
    pub fn choose(&mut self, board: &Board, engine: Player) -> Result<Position, EngineError> {
        best_move(board, engine, engine.opponent(), &mut self.rng)
    }

    /// Mutable access to the RNG, e.g. to drive a random opponent.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
