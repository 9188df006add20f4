//! A single game on one board, with move history.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use triqui_engine::{Board, Player, Position, Square, Verdict};

/// Board, history and side to move for one game.
///
/// `X` always opens a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl Round {
    /// Creates an empty round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Applies a move and returns the verdict of the resulting board.
    ///
    /// Preconditions are always checked; postconditions only in debug builds.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn apply(&mut self, action: Move) -> Result<Verdict, MoveError> {
        MoveContract::pre(self, &action).inspect_err(|e| warn!(%e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(Verdict::of(&self.board))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut round = Self::new();
        for action in moves {
            if Verdict::of(&round.board).is_terminal() {
                return Err(MoveError::GameOver);
            }
            round.apply(*action)?;
        }
        Ok(round)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_alternates_turns() {
        let mut round = Round::new();
        assert_eq!(round.to_move(), Player::X);
        let verdict = round.apply(Move::new(Player::X, Position::Center)).unwrap();
        assert_eq!(verdict, Verdict::Undecided);
        assert_eq!(round.to_move(), Player::O);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_replay_to_win() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight),
        ];
        let round = Round::replay(&moves).unwrap();
        assert_eq!(Verdict::of(round.board()), Verdict::Won(Player::X));
    }

    #[test]
    fn test_replay_past_end_rejected() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::BottomRight),
        ];
        assert_eq!(Round::replay(&moves), Err(MoveError::GameOver));
    }
}
