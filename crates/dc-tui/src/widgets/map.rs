//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use dc_core::Point;
use dc_core::dungeon::{Level, TileKind};

use crate::display::GlyphSet;

/// Widget for rendering the dungeon map
pub struct MapWidget<'a> {
    level: &'a Level,
    glyphs: &'a dyn GlyphSet,
    title: String,
    /// Draw cells the player has not seen yet, dimmed
    reveal: bool,
}

impl<'a> MapWidget<'a> {
    pub fn new(level: &'a Level, glyphs: &'a dyn GlyphSet) -> Self {
        Self {
            level,
            glyphs,
            title: String::from("Dungeon"),
            reveal: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    fn cell_display(&self, p: Point) -> (char, Style) {
        let gp = self.level.gamepoint_at(p);
        let tile = if self.reveal { gp.tile } else { gp.visible_tile() };

        let base_color = match tile {
            TileKind::Void => Color::Reset,
            TileKind::Floor => Color::White,
            TileKind::Wall => Color::Gray,
            TileKind::Door => Color::Yellow,
            TileKind::Player => Color::LightGreen,
            TileKind::StaircaseDown | TileKind::StaircaseUp => Color::Cyan,
        };
        let style = if gp.seen {
            Style::default().fg(base_color)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let style = if tile == TileKind::Player {
            style.bold()
        } else {
            style
        };

        (self.glyphs.tile_char(tile), style)
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.level.height().min(i32::from(inner.height));
        let cols = self.level.width().min(i32::from(inner.width));
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(Point::new(x, y));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
