//! Triqui - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use triqui::{OpponentKind, TriquiConfig, self_play};
use triqui_engine::{Board, Player, Verdict, is_move_legal, score_moves};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TriquiConfig::load_or_default(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove {
            board,
            engine,
            seed,
        } => run_best_move(&config.with_seed(seed), board, engine),
        Command::Verdict { board } => {
            println!("{}", Verdict::of(&board));
            Ok(())
        }
        Command::Legal { board, index } => {
            println!("{}", is_move_legal(&board, index));
            Ok(())
        }
        Command::Analyze {
            board,
            engine,
            json,
        } => run_analyze(board, engine, json),
        Command::SelfPlay {
            games,
            opponent,
            seed,
            json,
        } => run_self_play(&config.with_seed(seed), games, opponent, json),
    }
}

/// Print the engine's chosen cell index.
#[instrument(skip(config), fields(board = %board))]
fn run_best_move(config: &TriquiConfig, board: Board, engine: Player) -> Result<()> {
    let mut oracle = config.oracle();
    let position = oracle.choose(&board, engine)?;
    info!(position = position.to_index(), "Best move found");
    println!("{}", position.to_index());
    Ok(())
}

/// One row of `analyze` output.
#[derive(Debug, Serialize)]
struct ScoredMove {
    index: usize,
    position: String,
    score: i32,
}

/// Print per-move minimax scores.
#[instrument(fields(board = %board))]
fn run_analyze(board: Board, engine: Player, json: bool) -> Result<()> {
    let scored: Vec<ScoredMove> = score_moves(&board, engine, engine.opponent())?
        .into_iter()
        .map(|(pos, score)| ScoredMove {
            index: pos.to_index(),
            position: pos.label().to_string(),
            score,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&scored).context("Failed to encode analysis")?;
        println!("{out}");
    } else {
        println!("{}\n", board.display());
        for mv in &scored {
            println!("{} {:<14} {:>3}", mv.index, mv.position, mv.score);
        }
    }
    Ok(())
}

/// Run a self-play batch and print the report.
#[instrument(skip(config))]
fn run_self_play(
    config: &TriquiConfig,
    games: Option<u32>,
    opponent: OpponentKind,
    json: bool,
) -> Result<()> {
    let games = games.unwrap_or(*config.self_play_games());
    let mut oracle = config.oracle();
    let report = self_play(games, opponent, &mut oracle)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{out}");
    } else {
        println!("{report}");
    }
    Ok(())
}
