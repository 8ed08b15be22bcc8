//! Tile grid rendering.

use puzzle_core::{Coord, Game};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{CELL_HEIGHT, CELL_WIDTH, grid_rect};

/// Tile background colors, cycled by value.
const TILE_COLORS: [Color; 8] = [
    Color::Rgb(241, 196, 15),  // Yellow
    Color::Rgb(230, 126, 34),  // Orange
    Color::Rgb(231, 76, 60),   // Red
    Color::Rgb(155, 89, 182),  // Purple
    Color::Rgb(52, 152, 219),  // Blue
    Color::Rgb(46, 204, 113),  // Green
    Color::Rgb(26, 188, 156),  // Teal
    Color::Rgb(52, 73, 94),    // Dark blue
];

/// Renders the tile grid centered in `area`. The empty cell is left blank.
pub fn render_board(f: &mut Frame, area: Rect, game: &Game) {
    let board = game.board();
    let n = board.size();
    let grid = grid_rect(area, n);

    for row in 0..n {
        for col in 0..n {
            let value = match board.get(Coord::new(row, col)) {
                Some(0) | None => continue,
                Some(v) => v,
            };
            let cell = Rect::new(
                grid.x + col as u16 * CELL_WIDTH,
                grid.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            let color = TILE_COLORS[(value as usize - 1) % TILE_COLORS.len()];
            let tile = Paragraph::new(value.to_string())
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(tile, cell);
        }
    }
}
