//! Triqui engine - pure tic-tac-toe rules and an optimal-move oracle.
//!
//! Every operation is a function of the board it is given. Boards are
//! small `Copy` values owned by the caller; the engine never keeps state
//! between calls, so it can be used from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use triqui_engine::{Board, MoveOracle, Player, Position, Verdict};
//!
//! let board: Board = "XX. .O. ..O".parse()?;
//! let mut oracle = MoveOracle::seeded(7);
//! let mv = oracle.choose(&board, Player::X)?;
//! assert_eq!(mv, Position::TopRight);
//!
//! let next = board.with_mark(mv, Player::X);
//! assert_eq!(Verdict::of(&next), Verdict::Won(Player::X));
//! # Ok::<(), triqui_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod oracle;
mod position;
pub mod rules;
mod types;
mod verdict;

pub use error::{EngineError, EngineErrorKind};
pub use oracle::{MoveOracle, WIN_SCORE, best_move, score_moves};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, is_move_legal};
pub use types::{Board, Player, Square};
pub use verdict::Verdict;

/// Alias for the two non-empty cell marks.
pub type Mark = Player;
