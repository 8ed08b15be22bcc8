//! Application state and input translation.

use crossterm::event::KeyCode;
use puzzle_core::{Coord, Game};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::ui::Hit;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

const HELP: &str = "Arrow keys or click a tile to slide. N: new game, Q: quit.";

/// Main application state: the game, its RNG, and a status line.
pub struct App {
    game: Game,
    rng: StdRng,
    status: String,
}

impl App {
    /// Creates a shuffled game. A seed makes the shuffle reproducible.
    pub fn new(size: usize, shuffle_steps: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::new(size, shuffle_steps, &mut rng);
        Self {
            game,
            rng,
            status: HELP.to_string(),
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Translates a key press into a game operation.
    pub fn handle_key(&mut self, key: KeyCode) -> Signal {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Signal::Quit,
            KeyCode::Char('n') | KeyCode::Char('r') => self.new_game(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let empty = self.game.board().empty();
                let size = self.game.board().size();
                if let Some(target) = directional_target(empty, size, key) {
                    self.push_tile(target);
                }
            }
            _ => {}
        }
        Signal::Continue
    }

    /// Dispatches a resolved mouse click.
    pub fn handle_hit(&mut self, hit: Hit) {
        match hit {
            Hit::Tile(coord) => self.push_tile(coord),
            Hit::NewGameButton => self.new_game(),
        }
    }

    fn push_tile(&mut self, target: Coord) {
        match self.game.try_move(target.row, target.col) {
            Ok(()) => {
                if self.game.is_over() {
                    let secs = self.game.elapsed().as_secs();
                    self.status = format!(
                        "Congratulations! Solved in {} moves and {}s. Press N for a new game.",
                        self.game.moves(),
                        secs
                    );
                } else {
                    self.status = HELP.to_string();
                }
            }
            Err(e) => {
                debug!(row = target.row, col = target.col, error = %e, "move rejected");
            }
        }
    }

    fn new_game(&mut self) {
        debug!("starting new game");
        self.game.reset(&mut self.rng);
        self.status = HELP.to_string();
    }
}

/// Maps an arrow key to the cell that should slide into the empty cell:
/// pressing Up moves the tile below the empty cell up, and so on. Returns
/// `None` when that cell would be off the board.
fn directional_target(empty: Coord, size: usize, key: KeyCode) -> Option<Coord> {
    match key {
        KeyCode::Up if empty.row + 1 < size => Some(Coord::new(empty.row + 1, empty.col)),
        KeyCode::Down if empty.row > 0 => Some(Coord::new(empty.row - 1, empty.col)),
        KeyCode::Left if empty.col + 1 < size => Some(Coord::new(empty.row, empty.col + 1)),
        KeyCode::Right if empty.col > 0 => Some(Coord::new(empty.row, empty.col - 1)),
        _ => None,
    }
}
