//! Two-player terminal tic-tac-toe.
//!
//! Game rules live in [`tictactoe_core`]; this crate adds the terminal
//! front end, the move chime, configuration and logging.
//!
//! # Architecture
//!
//! - **Core**: board, outcome evaluation, turns and score (`tictactoe_core`)
//! - **App**: owns the session and turns user actions into session calls
//! - **UI**: stateless rendering plus mouse hit-testing on the same layout
//! - **Audio**: best-effort chime on every accepted move

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod cli;
mod config;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Audio
pub use audio::{Chime, Silent, TerminalBell, chime_for};

// Crate-level exports - TUI
pub use tui::app::{Action, App, Direction, Notification, RESET_MESSAGE, WELCOME_MESSAGE, move_cursor};
pub use tui::input::action_for;
pub use tui::run_tui;
pub use tui::ui::{ScreenLayout, Target, draw};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, GameSession, Line, Outcome, Phase, Player, Position, Scoreboard, SessionListener,
    Square,
};
