//! Running tally of finished games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use triqui_engine::{Player, Verdict};

/// Outcome of a finished game from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Winner {
    /// The human player won.
    Player,
    /// The engine won.
    Engine,
    /// Nobody won.
    Draw,
}

impl Winner {
    /// Maps a terminal verdict onto sides. Returns `None` for undecided boards.
    pub fn from_verdict(verdict: Verdict, player_mark: Player) -> Option<Self> {
        match verdict {
            Verdict::Won(mark) if mark == player_mark => Some(Winner::Player),
            Verdict::Won(_) => Some(Winner::Engine),
            Verdict::Draw => Some(Winner::Draw),
            Verdict::Undecided => None,
        }
    }
}

/// Wins and draws across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    player_wins: u32,
    draws: u32,
    engine_wins: u32,
}

impl Scoreboard {
    /// Records one finished game.
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Engine => self.engine_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.player_wins + self.draws + self.engine_wins
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} / draws {} / engine {}",
            self.player_wins, self.draws, self.engine_wins
        )
    }
}
