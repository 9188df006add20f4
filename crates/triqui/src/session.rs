//! Match state machine between a human player and the engine.
//!
//! The engine itself is stateless; this is the caller that owns the board,
//! decides whose turn it is and keeps score across rounds.

use crate::action::{Move, MoveError};
use crate::round::Round;
use crate::scoreboard::{Scoreboard, Winner};
use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use triqui_engine::{Board, MoveOracle, Player, Position, Verdict};

/// Who opens the round. The opener always plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum FirstMover {
    /// The human opens.
    Player,
    /// The engine opens.
    Engine,
}

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for [`Match::choose_first`].
    AwaitingFirstMoveChoice,
    /// The human is to move.
    PlayerTurn,
    /// The engine is to move.
    EngineTurn,
    /// The round has ended.
    GameOver(Verdict),
}

/// A sequence of rounds between a human and the engine.
#[derive(Debug, Clone)]
pub struct Match<R = SmallRng> {
    round: Round,
    phase: MatchPhase,
    player_mark: Player,
    engine_mark: Player,
    scores: Scoreboard,
    oracle: MoveOracle<R>,
}

impl<R: Rng> Match<R> {
    /// Creates a match waiting for the first-mover choice.
    pub fn new(oracle: MoveOracle<R>) -> Self {
        Self {
            round: Round::new(),
            phase: MatchPhase::AwaitingFirstMoveChoice,
            player_mark: Player::X,
            engine_mark: Player::O,
            scores: Scoreboard::default(),
            oracle,
        }
    }

    /// Assigns marks and starts the round.
    #[instrument(skip(self))]
    pub fn choose_first(&mut self, first: FirstMover) -> Result<MatchPhase, MoveError> {
        if self.phase != MatchPhase::AwaitingFirstMoveChoice {
            return Err(MoveError::AlreadyStarted);
        }
        let (player_mark, phase) = match first {
            FirstMover::Player => (Player::X, MatchPhase::PlayerTurn),
            FirstMover::Engine => (Player::O, MatchPhase::EngineTurn),
        };
        self.player_mark = player_mark;
        self.engine_mark = player_mark.opponent();
        self.phase = phase;
        info!(player = %self.player_mark, engine = %self.engine_mark, "Round started");
        Ok(self.phase)
    }

    /// Plays the human's move at `index` (0-8).
    #[instrument(skip(self))]
    pub fn play(&mut self, index: isize) -> Result<MatchPhase, MoveError> {
        self.expect_turn(MatchPhase::PlayerTurn)?;
        let position = Position::from_signed(index).ok_or_else(|| {
            warn!(index, "Move outside the board");
            MoveError::OutOfRange(index)
        })?;
        self.apply(Move::new(self.player_mark, position))
    }

    /// Lets the engine move. Returns the position it played and the new phase.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<(Position, MatchPhase), MoveError> {
        self.expect_turn(MatchPhase::EngineTurn)?;
        let position = self.oracle.choose(self.round.board(), self.engine_mark)?;
        debug!(position = position.to_index(), "Engine move");
        let phase = self.apply(Move::new(self.engine_mark, position))?;
        Ok((position, phase))
    }

    /// Clears the board for another round, keeping the scores.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.round = Round::new();
        self.phase = MatchPhase::AwaitingFirstMoveChoice;
    }

    fn expect_turn(&self, wanted: MatchPhase) -> Result<(), MoveError> {
        match self.phase {
            phase if phase == wanted => Ok(()),
            MatchPhase::AwaitingFirstMoveChoice => Err(MoveError::AwaitingFirstMove),
            MatchPhase::GameOver(_) => Err(MoveError::GameOver),
            MatchPhase::PlayerTurn | MatchPhase::EngineTurn => Err(MoveError::NotYourTurn),
        }
    }

    fn apply(&mut self, action: Move) -> Result<MatchPhase, MoveError> {
        let verdict = self.round.apply(action)?;
        self.phase = match Winner::from_verdict(verdict, self.player_mark) {
            Some(winner) => {
                self.scores.record(winner);
                info!(%winner, scores = %self.scores, "Round over");
                MatchPhase::GameOver(verdict)
            }
            None if action.player == self.player_mark => MatchPhase::EngineTurn,
            None => MatchPhase::PlayerTurn,
        };
        Ok(self.phase)
    }

    /// Current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Current round, including history.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The human's mark this round.
    pub fn player_mark(&self) -> Player {
        self.player_mark
    }

    /// The engine's mark this round.
    pub fn engine_mark(&self) -> Player {
        self.engine_mark
    }

    /// Scores across rounds.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }
}
