//! Terminal UI: board with a falling-token animation, settings form for the
//! next game, and the end-of-game banner.

mod animation;
mod app;
pub mod board_widget;
mod game_view;
mod settings_view;

pub use animation::DropAnimation;
pub use app::App;
pub use settings_view::{SettingsField, SettingsForm};
