//! Rooms
//!
//! A room is a rectangle placed at random inside its grid cell. Its border
//! cells are walls, everything strictly inside is floor.

use strum::{Display, EnumIter};

use super::element::{MapElement, TileKind};
use crate::MIN_ROOM_SIZE;
use crate::geometry::{Point, rect_points};
use crate::rng::GameRng;

/// A wall of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// Check if a corridor leaving through this side starts out vertically
    pub const fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Rectangle of walls around a floor
///
/// The rectangle spans `x..=x+width` and `y..=y+height`, so the wall ring
/// sits on both bounds and the floor is `x+1..=x+width-1` by
/// `y+1..=y+height-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Left wall column
    pub x: i32,
    /// Top wall row
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    /// Create a room at an explicit position
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Roll a room inside the cell bounded by corners `a` and `b`
    ///
    /// Width and height are drawn from `MIN_ROOM_SIZE..=span-1`, then the
    /// room is shifted by a random amount within the leftover slack. The far
    /// edge of the room always stays at least one cell short of `b`, which
    /// keeps rooms of neighboring cells apart. Callers validate the cell
    /// spans beforehand (see `GenerationConfig::validate`).
    pub fn generate(a: Point, b: Point, rng: &mut GameRng) -> Self {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        debug_assert!(dx > MIN_ROOM_SIZE && dy > MIN_ROOM_SIZE);

        let width = rng.rn_range(MIN_ROOM_SIZE, dx - 1);
        let height = rng.rn_range(MIN_ROOM_SIZE, dy - 1);
        let x = a.x + rng.rn2((dx - width) as u32) as i32;
        let y = a.y + rng.rn2((dy - height) as u32) as i32;

        Self::new(x, y, width, height)
    }

    /// Top-left corner
    pub const fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right corner
    pub const fn far_corner(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if the point lies on the room's rectangle, walls included
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Check if the point is floor
    pub const fn is_inner(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }

    pub const fn is_wall(&self, p: Point) -> bool {
        self.contains(p) && !self.is_inner(p)
    }

    /// All cells of the rectangle
    pub fn points(&self) -> Vec<Point> {
        rect_points(self.anchor(), self.far_corner())
    }

    /// Floor cells
    pub fn inner_points(&self) -> Vec<Point> {
        rect_points(
            Point::new(self.x + 1, self.y + 1),
            Point::new(self.x + self.width - 1, self.y + self.height - 1),
        )
    }

    /// Border cells, in the same order as [`Room::points`]
    pub fn wall_points(&self) -> Vec<Point> {
        self.points()
            .into_iter()
            .filter(|&p| self.is_wall(p))
            .collect()
    }

    pub fn random_inner_point(&self, rng: &mut GameRng) -> Point {
        let x = rng.rn_range(self.x + 1, self.x + self.width - 1);
        let y = rng.rn_range(self.y + 1, self.y + self.height - 1);
        Point::new(x, y)
    }

    /// Wall cell in the middle of a side, lined up with the room's center
    pub const fn wall_exit(&self, side: Side) -> Point {
        let c = self.center();
        match side {
            Side::Top => Point::new(c.x, self.y),
            Side::Bottom => Point::new(c.x, self.y + self.height),
            Side::Left => Point::new(self.x, c.y),
            Side::Right => Point::new(self.x + self.width, c.y),
        }
    }
}

impl MapElement for Room {
    fn exists_at(&self, p: Point) -> bool {
        self.contains(p)
    }

    fn tile_at(&self, p: Point) -> TileKind {
        if self.is_wall(p) {
            TileKind::Wall
        } else {
            TileKind::Floor
        }
    }
}
