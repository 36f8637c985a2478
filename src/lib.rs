//! # Connect Four
//!
//! Connect Four on a board of any size with a configurable match length,
//! played in the terminal. The engine is independent of the front end and
//! can drive any presentation layer.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, colors, line detection, engine
//! - [`ui`]: Terminal UI: game view, drop animation, settings form
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
