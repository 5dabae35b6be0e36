//! The player character as a map element

use super::element::{GamePoint, MapElement, TileKind};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub pos: Point,
}

impl Player {
    pub const fn new() -> Self {
        Self { pos: Point::ORIGIN }
    }

    pub fn move_to(&mut self, p: Point) {
        self.pos = p;
    }
}

impl MapElement for Player {
    fn exists_at(&self, p: Point) -> bool {
        self.pos == p
    }

    fn tile_at(&self, _p: Point) -> TileKind {
        TileKind::Player
    }

    fn is_persistent(&self) -> bool {
        false
    }

    /// The player always sees itself
    fn gamepoint_at(&self, p: Point) -> GamePoint {
        GamePoint::new(p, TileKind::Player, false, true).with_seen(true)
    }
}
