//! dc-core: Core logic for a grid dungeon crawler
//!
//! Generates room-and-corridor levels on a fixed grid and answers the two
//! questions a front end needs: "what tile is at this point" and "where may
//! the player stand". This crate has no I/O dependencies.

pub mod dungeon;
pub mod game;
pub mod geometry;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::{Axis, ConfigError};
pub use game::{Command, Direction, Game, GameLoopResult, MoveOutcome};
pub use geometry::{Line, Point};
pub use rng::GameRng;
