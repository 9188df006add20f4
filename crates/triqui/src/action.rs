//! First-class move types for a match.
//!
//! Moves are domain events: they can be validated before they are applied,
//! logged, and kept as match history.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use triqui_engine::{EngineError, Player, Position};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub player: Player,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Index outside 0-8.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfRange(isize),

    /// The mark does not belong to the side whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A human move was attempted while the engine is to move, or vice versa.
    #[display("Not this side's turn")]
    NotYourTurn,

    /// Nobody has been chosen to open yet.
    #[display("First mover has not been chosen")]
    AwaitingFirstMove,

    /// The first mover was already chosen.
    #[display("First mover already chosen")]
    AlreadyStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The engine could not produce a move.
    #[display("{}", _0)]
    #[from]
    Engine(EngineError),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
