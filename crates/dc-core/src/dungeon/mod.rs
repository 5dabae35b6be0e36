//! Dungeon system
//!
//! Contains level structure, the generation pipeline, and the elements a
//! level is made of.

mod config;
mod corridor;
mod door;
mod element;
mod level;
mod player;
mod room;
mod staircase;

pub use config::{ConnectivityTracker, GenerationConfig};
pub use corridor::{Corridor, choose_sides, defining_points};
pub use door::{Door, DoorFlags, door_positions, generate_doors};
pub use element::{ElementRef, GamePoint, MapElement, TileKind};
pub use level::{GenerationStage, Level};
pub use player::Player;
pub use room::{Room, Side};
pub use staircase::{Staircase, generate_staircases};
