//! Command-line interface for triqui.

use triqui::OpponentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triqui_engine::{Board, Player};

/// Triqui - tic-tac-toe board analysis with a perfect-play engine
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty.
/// Spaces, `|` and `/` may separate rows, e.g. "XX./.O./..O".
#[derive(Parser, Debug)]
#[command(name = "triqui")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a board
    BestMove {
        /// Board to analyse
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(short, long)]
        engine: Player,

        /// Seed for tie-breaking (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the verdict of a board
    Verdict {
        /// Board to classify
        #[arg(short, long)]
        board: Board,
    },

    /// Check whether a move is legal
    Legal {
        /// Board to check against
        #[arg(short, long)]
        board: Board,

        /// Cell index (0-8)
        #[arg(short, long, allow_negative_numbers = true)]
        index: isize,
    },

    /// Print the minimax score of every legal move
    Analyze {
        /// Board to analyse
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(short, long)]
        engine: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play a batch of games against an opponent
    SelfPlay {
        /// Number of games (overrides config)
        #[arg(short, long)]
        games: Option<u32>,

        /// Opponent strategy
        #[arg(short, long, default_value = "random")]
        opponent: OpponentKind,

        /// Seed for all randomness (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
