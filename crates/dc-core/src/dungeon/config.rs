//! Generation parameters and their validation

use crate::error::{Axis, ConfigError};
use crate::geometry::Point;
use crate::{MAP_HEIGHT, MAP_WIDTH, MIN_ROOM_SIZE, ROOM_COLS, ROOM_CONNECTIONS, ROOM_ROWS};

/// Tracks room connectivity using equivalence classes
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    /// Each room's equivalence class (rooms in same class are connected)
    classes: Vec<usize>,
}

impl ConnectivityTracker {
    /// Create a new tracker for the given number of rooms
    pub fn new(num_rooms: usize) -> Self {
        // Initially, each room is its own equivalence class
        Self {
            classes: (0..num_rooms).collect(),
        }
    }

    /// Merge equivalence classes when rooms are connected
    pub fn merge(&mut self, a: usize, b: usize) {
        if a >= self.classes.len() || b >= self.classes.len() {
            return;
        }

        let old_class = self.classes[b];
        let new_class = self.classes[a];

        for class in &mut self.classes {
            if *class == old_class {
                *class = new_class;
            }
        }
    }

    /// First room not connected to room 0, if any
    pub fn first_unreachable(&self) -> Option<usize> {
        let first_class = *self.classes.first()?;
        self.classes.iter().position(|&c| c != first_class)
    }
}

/// Shape of a generated level
///
/// The default is the fixed 60x32 grid split into 2 rows by 3 columns of
/// room cells, joined as a grid graph. Any other shape must pass
/// [`GenerationConfig::validate`] before a level is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub room_rows: usize,
    pub room_cols: usize,
    /// Pairs of row-major room indices to join with a corridor
    pub connections: Vec<(usize, usize)>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            room_rows: ROOM_ROWS,
            room_cols: ROOM_COLS,
            connections: ROOM_CONNECTIONS.to_vec(),
        }
    }
}

impl GenerationConfig {
    pub fn room_count(&self) -> usize {
        self.room_rows * self.room_cols
    }

    /// Corners of the grid cell hosting room `index`
    ///
    /// Cells are numbered row-major. Each cell starts one past the previous
    /// cell's far corner, so a room in it can never share a wall with its
    /// neighbors.
    pub fn cell_bounds(&self, index: usize) -> (Point, Point) {
        let cols = self.room_cols.max(1);
        let rows = self.room_rows.max(1) as i32;
        let col_width = self.width / cols as i32;
        let row_height = self.height / rows;
        let i = (index / cols) as i32;
        let j = (index % cols) as i32;

        let a = Point::new(j * col_width + j, i * row_height + i);
        let b = Point::new((j + 1) * col_width, (i + 1) * row_height);
        (a, b)
    }

    /// Corners of every cell, in room order
    pub fn cells(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.room_count()).map(|index| self.cell_bounds(index))
    }

    /// Check that every cell fits a room and the connections join all rooms
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_rows == 0 || self.room_cols == 0 {
            return Err(ConfigError::EmptyRoomGrid {
                rows: self.room_rows,
                cols: self.room_cols,
            });
        }

        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        // A side of MIN_ROOM_SIZE needs one more cell of span for the margin
        let min = MIN_ROOM_SIZE + 1;
        for (cell, (a, b)) in self.cells().enumerate() {
            let dx = b.x - a.x;
            if dx < min {
                return Err(ConfigError::CellTooSmall {
                    axis: Axis::Horizontal,
                    cell,
                    span: dx,
                    min,
                });
            }
            let dy = b.y - a.y;
            if dy < min {
                return Err(ConfigError::CellTooSmall {
                    axis: Axis::Vertical,
                    cell,
                    span: dy,
                    min,
                });
            }
        }

        let rooms = self.room_count();
        let mut tracker = ConnectivityTracker::new(rooms);
        for &(from, to) in &self.connections {
            if from >= rooms || to >= rooms {
                return Err(ConfigError::EdgeOutOfRange { from, to, rooms });
            }
            if from == to {
                return Err(ConfigError::SelfLoop { room: from });
            }
            tracker.merge(from, to);
        }

        match tracker.first_unreachable() {
            Some(room) => Err(ConfigError::Disconnected { room }),
            None => Ok(()),
        }
    }
}
