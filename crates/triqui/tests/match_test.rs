//! Full matches driven through the public API.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use triqui::{FirstMover, Match, MatchPhase, MoveError, Winner};
use triqui_engine::{MoveOracle, Verdict};

/// Plays one round with a random human; returns the final verdict.
fn play_round(game: &mut Match, first: FirstMover, human: &mut SmallRng) -> Verdict {
    game.choose_first(first).expect("fresh round");
    loop {
        match game.phase() {
            MatchPhase::PlayerTurn => {
                let moves = game.round().valid_moves();
                let pos = *moves.choose(human).expect("board not full");
                game.play(pos.to_index() as isize).expect("legal move");
            }
            MatchPhase::EngineTurn => {
                game.engine_move().expect("engine move");
            }
            MatchPhase::GameOver(verdict) => return verdict,
            MatchPhase::AwaitingFirstMoveChoice => panic!("round not started"),
        }
    }
}

#[test]
fn test_random_human_never_beats_engine() {
    let mut game = Match::new(MoveOracle::seeded(31));
    let mut human = SmallRng::seed_from_u64(32);

    for round in 0..40 {
        let first = if round % 2 == 0 {
            FirstMover::Player
        } else {
            FirstMover::Engine
        };
        let verdict = play_round(&mut game, first, &mut human);
        assert_ne!(
            Winner::from_verdict(verdict, game.player_mark()),
            Some(Winner::Player)
        );
        game.new_round();
    }

    assert_eq!(game.scores().games(), 40);
    assert_eq!(*game.scores().player_wins(), 0);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = Match::new(MoveOracle::seeded(8));
    let mut human = SmallRng::seed_from_u64(9);
    play_round(&mut game, FirstMover::Player, &mut human);

    assert_eq!(game.play(0), Err(MoveError::GameOver));
    assert_eq!(game.engine_move().unwrap_err(), MoveError::GameOver);
    assert!(game.choose_first(FirstMover::Player).is_err());
}
