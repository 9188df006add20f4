//! Exhaustive checks over every reachable position.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;
use triqui_engine::{Board, Player, Position, Verdict, best_move, is_move_legal};

/// Every position reachable by legal alternating play from the empty board,
/// stopping at terminal positions. X always opens.
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::X)];
    let mut out = Vec::new();

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push((board, to_move));
        if Verdict::of(&board).is_terminal() {
            continue;
        }
        for pos in Position::valid_moves(&board) {
            stack.push((board.with_mark(pos, to_move), to_move.opponent()));
        }
    }
    out
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_best_move_always_legal() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for (board, to_move) in reachable_positions() {
        if board.empty_count() == 0 {
            continue;
        }
        let before = board;
        let mv = best_move(&board, to_move, to_move.opponent(), &mut rng).unwrap();
        assert!(
            is_move_legal(&board, mv.to_index() as isize),
            "illegal move {mv} on {board}"
        );
        assert_eq!(board, before);
    }
}

/// Plays every opponent reply against the engine, failing on any engine loss.
fn engine_never_loses(board: Board, to_move: Player, engine: Player, rng: &mut SmallRng) {
    match Verdict::of(&board) {
        Verdict::Won(winner) => {
            assert_eq!(winner, engine, "engine lost on {board}");
            return;
        }
        Verdict::Draw => return,
        Verdict::Undecided => {}
    }

    if to_move == engine {
        let mv = best_move(&board, engine, engine.opponent(), rng).unwrap();
        engine_never_loses(board.with_mark(mv, engine), to_move.opponent(), engine, rng);
    } else {
        for pos in Position::valid_moves(&board) {
            engine_never_loses(board.with_mark(pos, to_move), engine, engine, rng);
        }
    }
}

#[test]
fn test_engine_never_loses_moving_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    engine_never_loses(Board::new(), Player::X, Player::X, &mut rng);
}

#[test]
fn test_engine_never_loses_moving_second() {
    let mut rng = SmallRng::seed_from_u64(2);
    engine_never_loses(Board::new(), Player::X, Player::O, &mut rng);
}

#[test]
fn test_engine_self_play_draws() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let mut board = Board::new();
        let mut to_move = Player::X;
        while !Verdict::of(&board).is_terminal() {
            let mv = best_move(&board, to_move, to_move.opponent(), &mut rng).unwrap();
            board = board.with_mark(mv, to_move);
            to_move = to_move.opponent();
        }
        assert_eq!(Verdict::of(&board), Verdict::Draw, "self-play ended {board}");
    }
}

#[test]
fn test_tie_break_covers_several_openings() {
    let mut rng = SmallRng::seed_from_u64(99);
    let openings: HashSet<Position> = (0..200)
        .map(|_| best_move(&Board::new(), Player::X, Player::O, &mut rng).unwrap())
        .collect();
    assert!(openings.len() > 1);
}
