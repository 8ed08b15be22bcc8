//! Pure game logic for the 25 Puzzle, a 5x5 sliding-tile game.
//!
//! The board holds the tiles `1..N²-1` plus a single empty cell. The only
//! legal transition slides a tile orthogonally adjacent to the empty cell
//! into it. Shuffling is performed with legal moves only, so every board a
//! [`Game`] hands out is solvable.
//!
//! This crate contains no I/O and no terminal code; frontends own the event
//! loop and call into [`Game`].
//!
//! # Example
//!
//! ```
//! use puzzle_core::Game;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut game = Game::new(5, 1000, &mut rng);
//! let empty = game.board().empty();
//! if empty.row > 0 {
//!     assert!(game.move_tile(empty.row - 1, empty.col));
//!     assert_eq!(game.moves(), 1);
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coord;
mod game;

pub use board::Board;
pub use coord::Coord;
pub use game::{Game, MoveError, Phase};

/// Shuffle length used by the game when none is specified.
pub const DEFAULT_SHUFFLE_STEPS: usize = 1000;
