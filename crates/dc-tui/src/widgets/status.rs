//! Status panel widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dc_core::Game;

/// Widget for rendering the depth line and the key help under the map
pub struct StatusWidget<'a> {
    game: &'a Game,
}

impl<'a> StatusWidget<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let pos = self.game.player_position();
        let line1 = format!(
            "Dlvl:{} Pos:{} Seed:{}",
            self.game.depth(),
            pos,
            self.game.seed()
        );

        let style = Style::default().fg(Color::White);
        let dim = Style::default().fg(Color::Gray);
        buf.set_string(area.x, area.y, &line1, style);
        for (row, line) in self.game.status().lines().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_string(area.x, y, line, dim);
        }
    }
}
