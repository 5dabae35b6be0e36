//! Map elements and tile resolution
//!
//! Everything that can occupy a cell (rooms, corridors, doors, staircases,
//! the player) answers the same two questions through [`MapElement`]. A level
//! keeps an ordered list of [`ElementRef`]s and the first element claiming a
//! point decides the tile there.

use strum::{Display, EnumIter};

use crate::geometry::Point;

/// What a renderer should draw at a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Void = 0,
    Floor = 1,
    Wall = 2,
    Door = 3,
    Player = 4,
    StaircaseDown = 5,
    StaircaseUp = 6,
}

/// Renderable state of one cell, derived from its occupying element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePoint {
    pub tile: TileKind,
    pub pos: Point,
    /// The player has observed this cell
    pub seen: bool,
    /// Terrain that stays put once generated
    pub persistent: bool,
    /// Occupant that can change position
    pub moving: bool,
}

impl GamePoint {
    pub const fn new(pos: Point, tile: TileKind, persistent: bool, moving: bool) -> Self {
        Self {
            tile,
            pos,
            seen: false,
            persistent,
            moving,
        }
    }

    /// Empty, never-seen cell
    pub const fn void(pos: Point) -> Self {
        Self::new(pos, TileKind::Void, true, false)
    }

    pub const fn with_seen(mut self, seen: bool) -> Self {
        self.seen = seen;
        self
    }

    /// The tile as the player knows it: unseen cells stay dark
    pub const fn visible_tile(&self) -> TileKind {
        if self.seen { self.tile } else { TileKind::Void }
    }
}

/// Something that occupies cells of the level
pub trait MapElement {
    /// Check if this element claims the point
    fn exists_at(&self, p: Point) -> bool;

    /// Tile at a point this element claims
    ///
    /// Only meaningful when `exists_at(p)` holds.
    fn tile_at(&self, p: Point) -> TileKind;

    /// Terrain elements are persistent, the player is not
    fn is_persistent(&self) -> bool {
        true
    }

    fn gamepoint_at(&self, p: Point) -> GamePoint {
        let persistent = self.is_persistent();
        GamePoint::new(p, self.tile_at(p), persistent, !persistent)
    }
}

/// Entry of a level's priority list
///
/// Indices point into the level's own collections; the list never owns
/// the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Player,
    Staircase(usize),
    Door(usize),
    Corridor(usize),
    Room(usize),
}
