//! Board state: the tile grid and the empty cell.

use crate::Coord;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Sentinel value marking the empty cell.
pub(crate) const EMPTY: u8 = 0;

/// An N×N sliding-tile grid.
///
/// Cells are stored row-major. Exactly one cell holds the sentinel `0`
/// (the empty cell); the rest hold each of `1..=N²-1` exactly once. The
/// empty cell's position is cached in `empty` so adjacency checks are O(1);
/// the cache is updated by every slide and never diverges from the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    empty: Coord,
}

impl Board {
    /// Creates a board in the canonical solved layout: tiles `1..N²-1` in
    /// row-major order with the empty cell at the bottom-right.
    ///
    /// `size` must be between 2 and 15 (tile values are stored as `u8`).
    pub fn solved(size: usize) -> Self {
        assert!((2..=15).contains(&size), "board size out of range: {size}");

        let mut cells: Vec<u8> = (1..(size * size) as u8).collect();
        cells.push(EMPTY);

        Self {
            size,
            cells,
            empty: Coord::new(size - 1, size - 1),
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Position of the empty cell.
    pub fn empty(&self) -> Coord {
        self.empty
    }

    /// Tile value at a coordinate, or `None` if it is off the board.
    /// The empty cell reads as `0`.
    pub fn get(&self, coord: Coord) -> Option<u8> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(self.cells[self.index(coord)])
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Checks whether a coordinate lies on the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Slides the tile at `from` into the empty cell and moves the empty
    /// cell to `from`. Callers must have validated adjacency and bounds.
    pub(crate) fn slide(&mut self, from: Coord) {
        let from_idx = self.index(from);
        let empty_idx = self.index(self.empty);
        self.cells[empty_idx] = self.cells[from_idx];
        self.cells[from_idx] = EMPTY;
        self.empty = from;
    }

    /// In-bounds cells orthogonally adjacent to the empty cell.
    pub fn empty_neighbours(&self) -> Vec<Coord> {
        let Coord { row, col } = self.empty;
        let mut result = Vec::with_capacity(4);
        if row > 0 {
            result.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.size {
            result.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            result.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.size {
            result.push(Coord::new(row, col + 1));
        }
        result
    }

    /// Randomizes the board with `steps` legal slides.
    ///
    /// Each step picks one of the empty cell's in-bounds neighbours
    /// uniformly at random and slides it in. Because only legal moves are
    /// used, the result is always reachable from the solved state, hence
    /// solvable. Does not touch any move counter.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, steps: usize) {
        for _ in 0..steps {
            let neighbours = self.empty_neighbours();
            if let Some(&pick) = neighbours.choose(rng) {
                self.slide(pick);
            }
        }
    }

    /// Checks for the canonical solved layout: cell `(i, j)` holds
    /// `i*N + j + 1` everywhere except the bottom-right, which is empty.
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[..last]
            .iter()
            .enumerate()
            .all(|(i, &v)| v as usize == i + 1)
            && self.cells[last] == EMPTY
    }

    /// Inversion-parity solvability check.
    ///
    /// Odd-sized boards are solvable iff the inversion count is even;
    /// even-sized boards iff the inversion count plus the empty cell's row
    /// index is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.count_inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.empty.row) % 2 == 1
        }
    }

    fn count_inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(|(i, &v)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&next| next != EMPTY && next < v)
                    .count()
            })
            .sum()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
