//! Core Connect Four logic: the grid, token colors, line detection, and the
//! engine that sequences turns and decides wins and ties.

mod board;
mod player;
pub mod rules;
mod settings;
mod state;

pub use board::{Cell, Grid};
pub use player::Color;
pub use settings::{GameSettings, MAX_HEIGHT, MAX_WIDTH};
pub use state::{Engine, FinishObserver, GameState, Placement};
