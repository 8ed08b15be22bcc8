//! Terminal UI for the 25 Puzzle
//!
//! One synchronous loop: draw the current game state, poll for input,
//! forward the event to the [`App`]. The game core never blocks, so a
//! plain `event::poll` tick is all the pacing this needs.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, Signal};

/// Command-line options.
#[derive(Parser, Debug)]
#[command(name = "puzzle_tui", about = "25 Puzzle - a sliding-tile game")]
struct Args {
    /// Board side length.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=10))]
    size: u8,

    /// Number of random slides used to shuffle a new board.
    #[arg(long, default_value_t = puzzle_core::DEFAULT_SHUFFLE_STEPS)]
    shuffle_steps: usize,

    /// Seed for the shuffle RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(size = args.size, shuffle_steps = args.shuffle_steps, "Starting 25 Puzzle TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(args.size as usize, args.shuffle_steps, args.seed);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // The poll timeout doubles as the redraw tick for the elapsed-time
        // display.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Signal::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(hit) = ui::hit_test(area, app.game().board().size(), mouse.column, mouse.row) {
                        app.handle_hit(hit);
                    }
                }
            }
            _ => {}
        }
    }
}
