//! Batch games between the engine and a chosen opponent.

use crate::action::{Move, MoveError};
use crate::round::Round;
use derive_getters::Getters;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use triqui_engine::{MoveOracle, Player, Verdict};

/// Strategy of the engine's opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// The same minimax oracle.
    Oracle,
    /// A uniformly random legal mover.
    Random,
}

/// Tally of a self-play batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SelfPlayReport {
    games: u32,
    engine_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: engine {} / opponent {} / draws {}",
            self.games, self.engine_wins, self.opponent_wins, self.draws
        )
    }
}

/// Plays `games` complete games, alternating which side opens.
///
/// The engine opens even-numbered games as `X` and answers odd-numbered
/// games as `O`. All randomness comes from `oracle`'s RNG.
#[instrument(skip(oracle))]
pub fn self_play(
    games: u32,
    opponent: OpponentKind,
    oracle: &mut MoveOracle,
) -> Result<SelfPlayReport, MoveError> {
    let mut report = SelfPlayReport::default();

    for game in 0..games {
        let engine = if game % 2 == 0 { Player::X } else { Player::O };
        let verdict = play_one(engine, opponent, oracle)?;
        debug!(game, %verdict, "Game finished");

        report.games += 1;
        match verdict.winner() {
            Some(winner) if winner == engine => report.engine_wins += 1,
            Some(_) => report.opponent_wins += 1,
            None => report.draws += 1,
        }
    }

    info!(%report, "Self-play complete");
    Ok(report)
}

fn play_one(
    engine: Player,
    opponent: OpponentKind,
    oracle: &mut MoveOracle,
) -> Result<Verdict, MoveError> {
    let mut round = Round::new();
    loop {
        let mover = round.to_move();
        let position = if mover == engine || opponent == OpponentKind::Oracle {
            oracle.choose(round.board(), mover)?
        } else {
            *round
                .valid_moves()
                .choose(oracle.rng_mut())
                .ok_or(MoveError::GameOver)?
        };
        let verdict = round.apply(Move::new(mover, position))?;
        if verdict.is_terminal() {
            return Ok(verdict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_vs_oracle_always_draws() {
        let mut oracle = MoveOracle::seeded(5);
        let report = self_play(10, OpponentKind::Oracle, &mut oracle).unwrap();
        assert_eq!(*report.games(), 10);
        assert_eq!(*report.draws(), 10);
    }

    #[test]
    fn test_random_opponent_never_wins() {
        let mut oracle = MoveOracle::seeded(6);
        let report = self_play(200, OpponentKind::Random, &mut oracle).unwrap();
        assert_eq!(*report.opponent_wins(), 0);
        assert!(*report.engine_wins() > 0);
    }

    #[test]
    fn test_opponent_kind_parse() {
        assert_eq!("random".parse::<OpponentKind>().unwrap(), OpponentKind::Random);
        assert_eq!(OpponentKind::Oracle.to_string(), "oracle");
    }
}
