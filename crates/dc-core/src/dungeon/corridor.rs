//! Corridor routing between rooms
//!
//! A corridor leaves each room through the middle of the wall facing the
//! other room and bends twice on the way, once on each side of the midpoint
//! between the two exits:
//!
//! ```text
//!   start ──┐ c1
//!           │
//!           m
//!           │
//!        c2 └── end
//! ```

use std::collections::HashSet;

use super::element::{MapElement, TileKind};
use super::room::{Room, Side};
use crate::geometry::{Line, Point};

/// Path joining the walls of two rooms
#[derive(Debug, Clone)]
pub struct Corridor {
    /// Index of the room the path starts from
    pub room_a: usize,
    /// Index of the room the path ends at
    pub room_b: usize,
    points: Vec<Point>,
    lookup: HashSet<Point>,
}

/// Pick the walls a corridor leaves through, as (side of `a`, side of `b`)
///
/// The dominant axis between the two centers decides: a mostly horizontal
/// offset exits through Left/Right walls facing each other, anything else
/// through Top/Bottom.
pub fn choose_sides(a: &Room, b: &Room) -> (Side, Side) {
    let ca = a.center();
    let cb = b.center();
    let dx = cb.x - ca.x;
    let dy = cb.y - ca.y;

    if dx.abs() > dy.abs() {
        if dx < 0 {
            (Side::Left, Side::Right)
        } else {
            (Side::Right, Side::Left)
        }
    } else if dy < 0 {
        (Side::Top, Side::Bottom)
    } else {
        (Side::Bottom, Side::Top)
    }
}

/// The five points a corridor is routed through: start, two elbows,
/// midpoint and end
pub fn defining_points(start: Point, end: Point, vertical: bool) -> [Point; 5] {
    let m = start.midpoint(end);
    if vertical {
        [
            start,
            Point::new(start.x, m.y),
            m,
            Point::new(end.x, m.y),
            end,
        ]
    } else {
        [
            start,
            Point::new(m.x, start.y),
            m,
            Point::new(m.x, end.y),
            end,
        ]
    }
}

/// Walk the segments between consecutive waypoints into one path
///
/// Each joint appears once, so consecutive path points are always adjacent.
fn route(waypoints: &[Point]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for pair in waypoints.windows(2) {
        for p in Line::new(pair[0], pair[1]).walk() {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
    }
    if points.is_empty() {
        points.extend(waypoints.first().copied());
    }
    points
}

impl Corridor {
    /// Route a corridor between two rooms of a level
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds; the level only passes
    /// indices checked by its config.
    pub fn generate(rooms: &[Room], a: usize, b: usize) -> Self {
        let (side_a, side_b) = choose_sides(&rooms[a], &rooms[b]);
        let start = rooms[a].wall_exit(side_a);
        let end = rooms[b].wall_exit(side_b);
        let waypoints = defining_points(start, end, side_a.is_vertical());
        Self::from_path(a, b, route(&waypoints))
    }

    fn from_path(room_a: usize, room_b: usize, points: Vec<Point>) -> Self {
        let lookup = points.iter().copied().collect();
        Self {
            room_a,
            room_b,
            points,
            lookup,
        }
    }

    /// Path cells from room A's wall to room B's wall
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MapElement for Corridor {
    fn exists_at(&self, p: Point) -> bool {
        self.lookup.contains(&p)
    }

    fn tile_at(&self, _p: Point) -> TileKind {
        TileKind::Floor
    }
}
