//! Fixed constants of the generation pipeline

/// Map dimensions
pub const MAP_WIDTH: i32 = 60;
pub const MAP_HEIGHT: i32 = 32;

/// Room grid layout (one room per cell)
pub const ROOM_ROWS: usize = 2;
pub const ROOM_COLS: usize = 3;

/// Smallest width/height a room may be rolled with
pub const MIN_ROOM_SIZE: i32 = 3;

/// Room connectivity graph over row-major room indices.
///
/// Forms the 2x3 grid graph: the two horizontal runs of each row plus the
/// three vertical links between rows.
pub const ROOM_CONNECTIONS: [(usize, usize); 7] =
    [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)];

/// Help text shown under the map
pub const STATUS_TEXT: &str =
    "h to go left, j to go down, k to go up, l to go right.\nd to take the stairs, q to quit";
