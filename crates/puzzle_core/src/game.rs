//! Game state machine around the board.

use crate::{Board, Coord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Phase of a game: two states, switched by [`Game::try_move`] (forward)
/// and [`Game::reset`] (back).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    Playing,
    /// The board reached the canonical layout; moves are rejected until
    /// the game is reset.
    Solved,
}

/// Why a move was rejected.
///
/// Frontends that only care about success can use [`Game::move_tile`],
/// which flattens all three cases to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("coordinate is outside the board")]
    OutOfBounds,
    /// The cell is not orthogonally adjacent to the empty cell. Also
    /// reported for the empty cell itself (distance zero).
    #[display("tile is not adjacent to the empty cell")]
    NotAdjacent,
    /// The puzzle is already solved; reset to play again.
    #[display("puzzle is already solved")]
    AlreadySolved,
}

/// A game in progress: board, move counter, start time and phase.
///
/// Construction always passes through the solved layout followed by a
/// legal-move shuffle, so there is no way to obtain an unsolvable game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    moves: u32,
    started: Instant,
    phase: Phase,
    shuffle_steps: usize,
}

impl Game {
    /// Creates a shuffled game.
    ///
    /// The board starts in the solved layout and is then randomized with
    /// `shuffle_steps` legal slides drawn from `rng`. Passing 0 steps
    /// yields a solved board in the `Playing` phase, which tests use to
    /// script exact positions.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(size: usize, shuffle_steps: usize, rng: &mut R) -> Self {
        let mut board = Board::solved(size);
        board.shuffle(rng, shuffle_steps);
        debug!(size, shuffle_steps, "new game");
        Self {
            board,
            moves: 0,
            started: Instant::now(),
            phase: Phase::Playing,
            shuffle_steps,
        }
    }

    /// Discards all state and starts a fresh shuffled game of the same
    /// size and shuffle length.
    #[instrument(skip(self, rng))]
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.board.size(), self.shuffle_steps, rng);
    }

    /// Attempts to slide the tile at `(row, col)` into the empty cell.
    ///
    /// On success the tile and the empty cell swap, the move counter goes
    /// up by one, and the phase flips to `Solved` if the board is now in
    /// the canonical layout.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadySolved`] once the game is over, for any input.
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board.
    /// - [`MoveError::NotAdjacent`] if the Manhattan distance to the empty
    ///   cell is not exactly 1.
    ///
    /// All rejections leave the game untouched.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.phase == Phase::Solved {
            return Err(MoveError::AlreadySolved);
        }

        let target = Coord::new(row, col);
        if !self.board.in_bounds(target) {
            return Err(MoveError::OutOfBounds);
        }
        if target.manhattan_distance(self.board.empty()) != 1 {
            return Err(MoveError::NotAdjacent);
        }

        self.board.slide(target);
        self.moves += 1;

        if self.board.is_solved() {
            self.phase = Phase::Solved;
            debug!(moves = self.moves, "puzzle solved");
        }

        Ok(())
    }

    /// Boolean form of [`Game::try_move`]: `true` on success, `false` for
    /// any rejection, never a panic, no state change on `false`.
    pub fn move_tile(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Successful player moves since the last reset. Shuffling does not
    /// count.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has been won.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Whether the board is in the canonical layout. Pure query.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Time since the game started, derived on demand.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
