//! Configuration errors raised before any generation starts

use thiserror::Error;

/// Axis of the level grid, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A generation config that cannot produce a valid level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("room grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyRoomGrid { rows: usize, cols: usize },

    #[error("a {width}x{height} grid has more cells than can be indexed")]
    GridTooLarge { width: i32, height: i32 },

    #[error("{axis} span of room cell {cell} is {span}, a room needs at least {min}")]
    CellTooSmall {
        axis: Axis,
        cell: usize,
        span: i32,
        min: i32,
    },

    #[error("connection {from} -> {to} refers to a room that does not exist ({rooms} rooms)")]
    EdgeOutOfRange { from: usize, to: usize, rooms: usize },

    #[error("connection {room} -> {room} joins a room to itself")]
    SelfLoop { room: usize },

    #[error("connections leave room {room} unreachable from room 0")]
    Disconnected { room: usize },
}
