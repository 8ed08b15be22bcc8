//! Tests for board invariants under shuffling.

use puzzle_core::{Board, Coord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Every reachable board holds each tile value exactly once, one empty
/// cell, and an empty-position cache that matches the grid.
fn assert_board_coherent(board: &Board) {
    let n = board.size();
    let mut seen = HashSet::new();
    let mut empties = 0;

    for row in 0..n {
        for col in 0..n {
            let value = board.get(Coord::new(row, col)).unwrap();
            if value == 0 {
                empties += 1;
                assert_eq!(board.empty(), Coord::new(row, col), "stale empty cache");
            } else {
                assert!(seen.insert(value), "duplicate tile {value}");
            }
        }
    }

    assert_eq!(empties, 1, "expected exactly one empty cell");
    let expected: HashSet<u8> = (1..(n * n) as u8).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_shuffle_preserves_tile_multiset() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let mut board = Board::solved(5);
        board.shuffle(&mut rng, 1000);
        assert_board_coherent(&board);
    }
}

#[test]
fn test_shuffle_result_is_solvable() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut board = Board::solved(5);
        board.shuffle(&mut rng, 1000);
        assert!(board.is_solvable());
    }
}

#[test]
fn test_shuffle_zero_steps_is_noop() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut board = Board::solved(5);
    board.shuffle(&mut rng, 0);
    assert!(board.is_solved());
}

#[test]
fn test_shuffle_small_board_stays_coherent() {
    // A 2x2 board exercises the corner cases of neighbour enumeration.
    let mut rng = StdRng::seed_from_u64(99);
    let mut board = Board::solved(2);
    board.shuffle(&mut rng, 500);
    assert_board_coherent(&board);
    assert!(board.is_solvable());
}

#[test]
fn test_solved_board_is_solvable() {
    assert!(Board::solved(5).is_solvable());
    assert!(Board::solved(4).is_solvable());
    assert!(Board::solved(3).is_solvable());
}

#[test]
fn test_board_serializes() {
    let board = Board::solved(3);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.empty(), Coord::new(2, 2));
}
