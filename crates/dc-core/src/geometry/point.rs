//! Grid points

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate on the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    ///
    /// Only used as a routing heuristic, never for gameplay measurement.
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Squared Euclidean distance; orders points exactly like `distance`
    pub const fn distance_squared(self, other: Point) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }

    /// Number of 4-directional steps between two points
    pub const fn manhattan(self, other: Point) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// The four axis-aligned neighbors, in East, South, West, North order
    pub const fn surrounding(self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x, self.y - 1),
        ]
    }

    /// Check if `other` is one 4-directional step away
    pub const fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }

    /// Point halfway to `other`, truncated toward `self`
    pub const fn midpoint(self, other: Point) -> Point {
        Point::new(
            self.x + (other.x - self.x) / 2,
            self.y + (other.y - self.y) / 2,
        )
    }

    /// Neighbor closest to `target`; the first of equally close neighbors wins
    pub fn step_toward(self, target: Point) -> Point {
        let neighbors = self.surrounding();
        let mut best = neighbors[0];
        for candidate in &neighbors[1..] {
            if candidate.distance_squared(target) < best.distance_squared(target) {
                best = *candidate;
            }
        }
        best
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every point of the inclusive rectangle spanned by `a` and `b`
///
/// Points are produced column by column (x outer, y inner). Empty when `b`
/// lies above or left of `a`.
pub fn rect_points(a: Point, b: Point) -> Vec<Point> {
    let mut points = Vec::new();
    for x in a.x..=b.x {
        for y in a.y..=b.y {
            points.push(Point::new(x, y));
        }
    }
    points
}
