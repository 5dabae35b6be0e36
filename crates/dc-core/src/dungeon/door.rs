//! Doors where corridors break through room walls

use std::collections::HashSet;

use bitflags::bitflags;

use super::corridor::Corridor;
use super::element::{MapElement, TileKind};
use super::room::Room;
use crate::geometry::Point;

bitflags! {
    /// Door state flags
    ///
    /// Carried for every door but not consulted by movement yet.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct DoorFlags: u8 {
        const LOCKED = 0x01;
        const HIDDEN = 0x02;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub pos: Point,
    pub flags: DoorFlags,
}

impl Door {
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            flags: DoorFlags::empty(),
        }
    }

    pub const fn is_locked(&self) -> bool {
        self.flags.contains(DoorFlags::LOCKED)
    }

    pub const fn is_hidden(&self) -> bool {
        self.flags.contains(DoorFlags::HIDDEN)
    }
}

impl MapElement for Door {
    fn exists_at(&self, p: Point) -> bool {
        self.pos == p
    }

    fn tile_at(&self, _p: Point) -> TileKind {
        TileKind::Door
    }
}

/// Cells that are both a room wall and part of a corridor
///
/// Ordered by room, then by the room's wall order.
pub fn door_positions(rooms: &[Room], corridors: &[Corridor]) -> Vec<Point> {
    let corridor_points: HashSet<Point> = corridors
        .iter()
        .flat_map(|c| c.points().iter().copied())
        .collect();

    rooms
        .iter()
        .flat_map(Room::wall_points)
        .filter(|p| corridor_points.contains(p))
        .collect()
}

/// One closed, visible door per wall/corridor intersection
pub fn generate_doors(rooms: &[Room], corridors: &[Corridor]) -> Vec<Door> {
    door_positions(rooms, corridors)
        .into_iter()
        .map(Door::new)
        .collect()
}
