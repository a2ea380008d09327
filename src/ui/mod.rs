//! Terminal UI: the match controller, keyboard input, the ratatui view, and
//! the startup mode prompt.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;
mod mode;
mod prompt;

pub use app::App;
pub use game_view::{outcome_line, result_line};
pub use input::{spawn_input_thread, InputEvent};
pub use mode::PlayMode;
pub use prompt::prompt_play_mode;
