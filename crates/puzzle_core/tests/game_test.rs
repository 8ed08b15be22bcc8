//! Tests for the game state machine: move acceptance, rejection, and the
//! solved-state freeze.

use puzzle_core::{Coord, Game, MoveError, Phase};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A 5x5 game scripted so the empty cell sits at (2, 2): slide the empty
/// cell up-left from the corner with exact moves, not a shuffle.
fn game_with_center_empty() -> Game {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = Game::new(5, 0, &mut rng);
    assert!(game.move_tile(3, 4));
    assert!(game.move_tile(2, 4));
    assert!(game.move_tile(2, 3));
    assert!(game.move_tile(2, 2));
    assert_eq!(game.board().empty(), Coord::new(2, 2));
    game
}

#[test]
fn test_move_acceptance() {
    let mut game = game_with_center_empty();
    let moves_before = game.moves();
    let value = game.board().get(Coord::new(2, 1)).unwrap();

    assert!(game.move_tile(2, 1));
    assert_eq!(game.board().get(Coord::new(2, 2)), Some(value));
    assert_eq!(game.board().get(Coord::new(2, 1)), Some(0));
    assert_eq!(game.board().empty(), Coord::new(2, 1));
    assert_eq!(game.moves(), moves_before + 1);
}

#[test]
fn test_move_rejection_not_adjacent() {
    let mut game = game_with_center_empty();
    let board_before = game.board().clone();
    let moves_before = game.moves();

    // Manhattan distance 4.
    assert!(!game.move_tile(0, 0));
    // Diagonal neighbour, distance 2.
    assert!(!game.move_tile(1, 1));
    // The empty cell itself, distance 0.
    assert!(!game.move_tile(2, 2));

    assert_eq!(game.board(), &board_before);
    assert_eq!(game.moves(), moves_before);
}

#[test]
fn test_move_rejection_out_of_bounds() {
    let mut game = game_with_center_empty();
    let board_before = game.board().clone();

    assert!(!game.move_tile(5, 2));
    assert!(!game.move_tile(2, 5));
    assert!(!game.move_tile(usize::MAX, usize::MAX));

    assert_eq!(game.board(), &board_before);
}

#[test]
fn test_try_move_names_the_rejection() {
    let mut game = game_with_center_empty();
    assert_eq!(game.try_move(9, 9), Err(MoveError::OutOfBounds));
    assert_eq!(game.try_move(0, 0), Err(MoveError::NotAdjacent));
    assert_eq!(game.try_move(2, 2), Err(MoveError::NotAdjacent));
}

#[test]
fn test_is_solved_is_idempotent() {
    let game = game_with_center_empty();
    assert_eq!(game.is_solved(), game.is_solved());
}

#[test]
fn test_shuffle_does_not_count_moves() {
    let mut rng = StdRng::seed_from_u64(3);
    let game = Game::new(5, 1000, &mut rng);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_solved_scenario_3x3() {
    // Spec scenario on a 3x3 board: slide 8 out of place and back.
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = Game::new(3, 0, &mut rng);
    assert_eq!(game.board().empty(), Coord::new(2, 2));

    assert!(game.move_tile(2, 1));
    let rows: Vec<&[u8]> = game.board().rows().collect();
    assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6], &[7, 0, 8]]);
    assert_eq!(game.board().empty(), Coord::new(2, 1));
    assert!(!game.is_solved());
    assert_eq!(game.moves(), 1);

    // Slide 8 back into place; this wins the game.
    assert!(game.move_tile(2, 2));
    assert!(game.is_solved());
    assert!(game.is_over());
    assert_eq!(game.moves(), 2);
    assert_eq!(game.phase(), Phase::Solved);
}

#[test]
fn test_solved_state_freezes_until_reset() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = Game::new(3, 0, &mut rng);
    assert!(game.move_tile(2, 1));
    assert!(game.move_tile(2, 2));
    assert!(game.is_over());

    let board_before = game.board().clone();
    for row in 0..3 {
        for col in 0..3 {
            assert!(!game.move_tile(row, col));
        }
    }
    assert_eq!(game.try_move(2, 1), Err(MoveError::AlreadySolved));
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.moves(), 2);

    game.reset(&mut rng);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.board().is_solvable());
}

#[test]
fn test_reset_rebuilds_all_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = Game::new(5, 1000, &mut rng);
    while game.moves() < 5 {
        let empty = game.board().empty();
        let row = if empty.row > 0 { empty.row - 1 } else { empty.row + 1 };
        assert!(game.move_tile(row, empty.col));
    }

    game.reset(&mut rng);
    assert_eq!(game.moves(), 0);
    assert!(!game.is_over());
    assert_eq!(game.board().size(), 5);
}
