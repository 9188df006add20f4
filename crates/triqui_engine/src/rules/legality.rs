//! Move legality.

use crate::{Board, Position};
use tracing::instrument;

/// Returns `true` iff `index` is within 0-8 and names an empty square.
///
/// Out-of-range and occupied indices are simply illegal; this never fails.
#[instrument(skip(board), fields(board = %board))]
pub fn is_move_legal(board: &Board, index: isize) -> bool {
    Position::from_signed(index).is_some_and(|pos| board.is_empty(pos))
}
