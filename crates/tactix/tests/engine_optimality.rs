//! Exhaustive optimality tests for the minimax engine.
//!
//! The full game tree is small enough to enumerate, so these tests
//! check the engine's guarantees against every line of play rather
//! than sampled positions.

use tactix::{engine, Game, GameStatus, Player};

/// Walks every game where X plays arbitrarily and O plays the
/// engine's move, asserting along the way that the engine never
/// picks an occupied square and that O never loses.
fn explore_against_all_x_lines(game: &Game, games_finished: &mut u32) {
    match game.status() {
        GameStatus::Won { player, .. } => {
            assert_ne!(
                *player,
                Player::X,
                "optimal O lost to X line of play:\n{}",
                game.board().display()
            );
            *games_finished += 1;
        }
        GameStatus::Draw => {
            *games_finished += 1;
        }
        GameStatus::InProgress => match game.current_player() {
            Player::X => {
                for pos in 0..9 {
                    if !game.board().is_empty(pos) {
                        continue;
                    }
                    let mut next = game.clone();
                    next.apply_move(pos, Player::X).unwrap();
                    explore_against_all_x_lines(&next, games_finished);
                }
            }
            Player::O => {
                let pos = engine::best_move(game.board())
                    .expect("in-progress board is not terminal");
                assert!(
                    game.board().is_empty(pos),
                    "engine chose occupied square {pos} on:\n{}",
                    game.board().display()
                );
                let mut next = game.clone();
                next.apply_move(pos, Player::O).unwrap();
                explore_against_all_x_lines(&next, games_finished);
            }
        },
    }
}

#[test]
fn optimal_o_never_loses_and_never_plays_occupied() {
    let mut games_finished = 0;
    explore_against_all_x_lines(&Game::new(), &mut games_finished);
    assert!(games_finished > 0);
}

#[test]
fn optimal_play_from_empty_board_is_a_draw() {
    let mut game = Game::new();
    while *game.status() == GameStatus::InProgress {
        let to_move = game.current_player();
        let mut scratch = game.board().clone();
        let pos = engine::search(&mut scratch, to_move)
            .index
            .expect("in-progress board is not terminal");
        game.apply_move(pos, to_move).unwrap();
    }
    assert_eq!(*game.status(), GameStatus::Draw);
}

#[test]
fn o_moving_first_on_empty_board_returns_valid_index() {
    let game = Game::new();
    let pos = engine::best_move(game.board()).unwrap();
    assert!(pos < 9);
    assert!(game.board().is_empty(pos));
}
