//! Command-line interface for tictactoe.

use crate::config::GameConfig;
use crate::session::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Difficulty;

/// Tic-tac-toe on boards from 3x3 up to 15x15
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with save files and a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the save file location
    #[arg(long, global = true)]
    pub save_file: Option<PathBuf>,

    /// Override the statistics export location
    #[arg(long, global = true)]
    pub stats_file: Option<PathBuf>,

    /// Seed for the AI's random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive main menu
    Menu,

    /// Start a new game right away
    Play {
        /// Board size (3-15); the configured default when omitted
        #[arg(short, long)]
        size: Option<usize>,

        /// Who plays
        #[arg(short, long, value_enum, default_value = "pva")]
        mode: Mode,

        /// AI difficulty; the configured default when omitted
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Load the saved game and offer to resume it
    Load,

    /// Show the counters stored in the save file
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(path) = &self.save_file {
            config = config.with_save_path(path.clone());
        }
        if let Some(path) = &self.stats_file {
            config = config.with_stats_path(path.clone());
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        config
    }
}
