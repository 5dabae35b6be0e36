//! Dungeon crawler in the terminal
//!
//! Main entry point for the game.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use dc_core::dungeon::GenerationConfig;
use dc_core::{Game, GameLoopResult, GameRng};
use dc_tui::{App, GraphicsMode};

/// Dungeon crawler in the terminal
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Explore a freshly generated dungeon", long_about = None)]
struct Args {
    /// Seed for level generation (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Glyph set: classic, fancy or auto
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,

    /// Show the whole map, not only what the player has seen
    #[arg(short = 'r', long = "reveal")]
    reveal: bool,

    /// Append log records to this file (filtered by RUST_LOG, default info).
    /// Without it nothing is logged, since stderr would draw over the map.
    #[arg(short = 'l', long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        dc_tui::logging::init_file_logging(path)?;
    }

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let game = Game::new(GenerationConfig::default(), rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::info!("starting with seed {}", game.seed());

    let mut app = App::new(game, args.graphics, args.reveal);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            match app.handle_event(event::read()?) {
                GameLoopResult::Descended => {
                    log::debug!("now at depth {}", app.game().depth());
                }
                GameLoopResult::Quit => break,
                GameLoopResult::Continue => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
