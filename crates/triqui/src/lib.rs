//! Triqui - a human-versus-engine tic-tac-toe driver.
//!
//! The rules and the move oracle live in `triqui_engine`; this crate is the
//! caller that owns the board between moves.
//!
//! # Architecture
//!
//! - **Round**: one board plus move history, validated by move contracts
//! - **Match**: phase state machine and scoreboard across rounds
//! - **Self-play**: batches of engine games for checking play strength
//! - **Config**: TOML settings for the CLI
//!
//! # Example
//!
//! ```
//! use triqui::{FirstMover, Match, MatchPhase};
//! use triqui_engine::MoveOracle;
//!
//! let mut game = Match::new(MoveOracle::seeded(1));
//! game.choose_first(FirstMover::Player)?;
//! assert_eq!(game.play(4)?, MatchPhase::EngineTurn);
//! let (_, phase) = game.engine_move()?;
//! assert_eq!(phase, MatchPhase::PlayerTurn);
//! # Ok::<(), triqui::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod round;
mod scoreboard;
mod selfplay;
mod session;

pub use action::{Move, MoveError};
pub use config::{ConfigError, TriquiConfig};
pub use contracts::{
    BoardConsistent, Contract, HistoryMatchesBoard, MoveContract, PlayersTurn, SquareIsEmpty,
};
pub use round::Round;
pub use scoreboard::{Scoreboard, Winner};
pub use selfplay::{OpponentKind, SelfPlayReport, self_play};
pub use session::{FirstMover, Match, MatchPhase};
