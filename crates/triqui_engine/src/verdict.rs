//! Outcome classification of a board.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The verdict of a board: a win for one player, a draw, or still open.
///
/// Verdicts are always recomputed from the board, never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A player holds a complete line.
    Won(Player),
    /// Full board, no line.
    Draw,
    /// Game still in progress.
    Undecided,
}

impl Verdict {
    /// Classifies a board. Winner takes precedence over a full board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        match check_winner(board) {
            Some(player) => Verdict::Won(player),
            None if is_full(board) => Verdict::Draw,
            None => Verdict::Undecided,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won(player) => Some(*player),
            Verdict::Draw | Verdict::Undecided => None,
        }
    }

    /// Returns true once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Undecided)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Won(player) => write!(f, "{} wins", player),
            Verdict::Draw => write!(f, "Draw"),
            Verdict::Undecided => write!(f, "Undecided"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        assert_eq!(Verdict::of(&Board::new()), Verdict::Undecided);
        assert_eq!(
            Verdict::of(&"XXX OO. ...".parse().unwrap()),
            Verdict::Won(Player::X)
        );
        assert_eq!(Verdict::of(&"XOX OXO OXO".parse().unwrap()), Verdict::Draw);
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Won(Player::O).to_string(), "O wins");
        assert_eq!(Verdict::Draw.to_string(), "Draw");
        assert!(!Verdict::Undecided.is_terminal());
    }
}
