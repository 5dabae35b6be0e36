//! Grid geometry
//!
//! Integer points, the 4-neighborhood used for both movement and corridor
//! routing, and the greedy walk that turns a line into grid points.

mod line;
mod point;

pub use line::{Line, Walk};
pub use point::{Point, rect_points};
