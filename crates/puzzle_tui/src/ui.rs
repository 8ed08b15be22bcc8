//! UI rendering using ratatui.
//!
//! All geometry goes through the helpers in this module so that mouse
//! hit-testing and drawing can never disagree about where a cell is.

mod board;

use crate::app::App;
use puzzle_core::Coord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub use board::render_board;

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 7;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 3;

const BUTTON_WIDTH: u16 = 14;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell (which may be the empty cell; the core rejects that).
    Tile(Coord),
    /// The "New Game" button.
    NewGameButton,
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = chunks(f.area());

    let title = Paragraph::new("25 Puzzle")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_stats(f, chunks[1], app);
    render_board(f, chunks[2], app.game());

    let bottom = bottom_split(chunks[3]);
    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, bottom[0]);

    let button = Paragraph::new("New Game")
        .style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, bottom[1]);

    if app.game().is_over() {
        render_win_overlay(f, chunks[2], app);
    }
}

/// Resolves a click at `(x, y)` against the same layout `draw` uses.
pub fn hit_test(area: Rect, board_size: usize, x: u16, y: u16) -> Option<Hit> {
    let chunks = chunks(area);
    let click = Position::new(x, y);

    if bottom_split(chunks[3])[1].contains(click) {
        return Some(Hit::NewGameButton);
    }

    let grid = grid_rect(chunks[2], board_size);
    if !grid.contains(click) {
        return None;
    }
    let row = ((y - grid.y) / CELL_HEIGHT) as usize;
    let col = ((x - grid.x) / CELL_WIDTH) as usize;
    if row < board_size && col < board_size {
        Some(Hit::Tile(Coord::new(row, col)))
    } else {
        None
    }
}

fn chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn bottom_split(area: Rect) -> [Rect; 2] {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
        .split(area);
    [halves[0], halves[1]]
}

/// The rectangle the tile grid occupies, centered in `area`.
fn grid_rect(area: Rect, board_size: usize) -> Rect {
    let n = board_size as u16;
    center_rect(area, n * CELL_WIDTH, n * CELL_HEIGHT)
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let moves = Paragraph::new(format!(" Moves: {}", app.game().moves()))
        .style(Style::default().fg(Color::White));
    f.render_widget(moves, halves[0]);

    let time = Paragraph::new(format!("Time: {}s ", app.game().elapsed().as_secs()))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Right);
    f.render_widget(time, halves[1]);
}

fn render_win_overlay(f: &mut Frame, area: Rect, app: &App) {
    let message = format!(
        "You solved the puzzle in {} moves\nand {} seconds!",
        app.game().moves(),
        app.game().elapsed().as_secs()
    );
    let overlay_area = center_rect(area, 40, 6);
    f.render_widget(Clear, overlay_area);
    let overlay = Paragraph::new(message)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Congratulations!"));
    f.render_widget(overlay, overlay_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
