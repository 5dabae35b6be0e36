//! dc-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game.

pub mod app;
pub mod display;
pub mod input;
pub mod logging;
pub mod widgets;

pub use app::App;
pub use display::GraphicsMode;
