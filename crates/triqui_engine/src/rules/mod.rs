//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules never modify the board they inspect.

pub mod draw;
pub mod legality;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legality::is_move_legal;
pub use win::{LINES, check_winner, winning_line};
