//! Console tic-tac-toe on N x N boards.
//!
//! The game rules and the AI live in [`tictactoe_core`]; this crate adds
//! the console front end, configuration, statistics and save files.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod menu;
pub mod persistence;
pub mod session;
pub mod stats;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, ConsoleError};
pub use menu::App;
pub use persistence::{PersistError, PersistErrorKind, SavedGame};
pub use session::{AiPlayer, GameSession, HumanPlayer, Mode, Participant};
pub use stats::{StatCounters, Statistics};
