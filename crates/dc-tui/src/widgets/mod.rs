//! Ratatui widgets for the map and the status panel

mod map;
mod status;

pub use map::MapWidget;
pub use status::StatusWidget;
