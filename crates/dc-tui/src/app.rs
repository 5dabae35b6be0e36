//! Application state and main loop logic

use crossterm::event::Event;
use ratatui::prelude::*;

use dc_core::{Game, GameLoopResult};

use crate::display::{self, GlyphSet, GraphicsMode};
use crate::input::key_to_token;
use crate::widgets::{MapWidget, StatusWidget};

/// Rows under the map: depth line plus the two help lines
const STATUS_HEIGHT: u16 = 3;

/// Application state
pub struct App {
    game: Game,
    glyph_set: Box<dyn GlyphSet>,
    reveal: bool,
    should_quit: bool,
}

impl App {
    pub fn new(game: Game, graphics_mode: GraphicsMode, reveal: bool) -> Self {
        Self {
            game,
            glyph_set: display::detect_glyph_set(graphics_mode),
            reveal,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a terminal event; anything but a key press is ignored
    pub fn handle_event(&mut self, event: Event) -> GameLoopResult {
        match event {
            Event::Key(key) => match key_to_token(key) {
                Some(token) => self.execute(token),
                None => GameLoopResult::Continue,
            },
            _ => GameLoopResult::Continue,
        }
    }

    /// Feed one input token to the game
    pub fn execute(&mut self, token: char) -> GameLoopResult {
        let result = self.game.handle_user_input(token);
        if result == GameLoopResult::Quit {
            self.should_quit = true;
        }
        result
    }

    pub fn render(&self, frame: &mut Frame) {
        let level = self.game.level();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(level.height() as u16 + 2), // Map + border
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let map = MapWidget::new(level, self.glyph_set.as_ref())
            .title(format!("Dungeon level {}", self.game.depth()))
            .reveal(self.reveal);
        frame.render_widget(map, chunks[0]);
        frame.render_widget(StatusWidget::new(&self.game), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new(Game::with_seed(1).unwrap(), GraphicsMode::Classic, false);
        assert!(!app.should_quit());
        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(app.handle_event(event), GameLoopResult::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_arrow_moves_like_vi_key() {
        let mut a = App::new(Game::with_seed(5).unwrap(), GraphicsMode::Classic, false);
        let mut b = App::new(Game::with_seed(5).unwrap(), GraphicsMode::Classic, false);
        a.handle_event(Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        b.execute('h');
        assert_eq!(a.game().player_position(), b.game().player_position());
    }
}
