//! Staircases to the next level

use super::element::{MapElement, TileKind};
use super::room::Room;
use crate::geometry::Point;
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staircase {
    pub pos: Point,
    /// Leads up instead of down
    pub up: bool,
}

impl Staircase {
    pub const fn down(pos: Point) -> Self {
        Self { pos, up: false }
    }

    pub const fn up(pos: Point) -> Self {
        Self { pos, up: true }
    }
}

impl MapElement for Staircase {
    fn exists_at(&self, p: Point) -> bool {
        self.pos == p
    }

    fn tile_at(&self, _p: Point) -> TileKind {
        if self.up {
            TileKind::StaircaseUp
        } else {
            TileKind::StaircaseDown
        }
    }
}

/// Place the level's single down staircase on the floor of a random room
///
/// Returns an empty list when there are no rooms.
pub fn generate_staircases(rooms: &[Room], rng: &mut GameRng) -> Vec<Staircase> {
    rng.choose(rooms)
        .map(|room| Staircase::down(room.random_inner_point(rng)))
        .into_iter()
        .collect()
}
