//! Contract-based validation for moves within a round.
//!
//! Contracts check a transition in two halves: preconditions on the
//! state and action before it is applied, postconditions relating the
//! state before and after.

use crate::action::{Move, MoveError};
use crate::round::Round;
use tracing::{instrument, warn};
use triqui_engine::{Board, Player, Square};

/// Preconditions and postconditions for applying `A` to `S`.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if round.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the mark must belong to the side to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the mover.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if mov.player == round.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Invariant: X and O counts differ by at most one, X never behind.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true when mark counts are consistent with X opening.
    #[instrument(skip(board), fields(board = %board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: replaying the history reproduces the board.
pub struct HistoryMatchesBoard;

impl HistoryMatchesBoard {
    /// Returns true when every mark on the board comes from history and vice versa.
    #[instrument(skip(round))]
    pub fn holds(round: &Round) -> bool {
        let mut replayed = Board::new();
        for mov in round.history() {
            replayed.set(mov.position, Square::Occupied(mov.player));
        }
        let filled = 9 - round.board().empty_count();
        let valid = replayed == *round.board() && round.history().len() == filled;
        if !valid {
            warn!(history_len = round.history().len(), "History does not match board");
        }
        valid
    }
}

/// Contract for moves.
///
/// Preconditions: square empty, correct mover.
/// Postconditions: exactly one new mark, earlier marks unchanged,
/// counts consistent, history matches board.
pub struct MoveContract;

impl Contract<Round, Move> for MoveContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, round)?;
        PlayersTurn::check(action, round)?;
        Ok(())
    }

    fn post(before: &Round, after: &Round) -> Result<(), MoveError> {
        let mut violations = Vec::new();

        let changed = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .count();
        let monotonic = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .all(|(b, a)| *b == Square::Empty || b == a);
        if changed != 1 || !monotonic {
            violations.push("exactly one empty square must be filled");
        }
        if !BoardConsistent::holds(after.board()) {
            violations.push("mark counts must stay balanced");
        }
        if !HistoryMatchesBoard::holds(after) {
            violations.push("history must match board");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triqui_engine::Position;

    #[test]
    fn test_precondition_empty_square() {
        let round = Round::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&round, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut round = Round::new();
        round.apply(Move::new(Player::X, Position::Center)).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&round, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let round = Round::new();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&round, &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Round::new();
        let mut after = before.clone();
        after.apply(Move::new(Player::X, Position::Center)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Round::new();
        let mut after = before.clone();
        after.apply(Move::new(Player::X, Position::Center)).unwrap();
        after.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&Board::new()));
        assert!(!BoardConsistent::holds(&"OO. ... ...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"XX. ... ...".parse().unwrap()));
    }
}
