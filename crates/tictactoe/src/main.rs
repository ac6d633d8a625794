//! Tic-tac-toe - console front end
//!
//! Runs the interactive menu, or a single command given on the command line.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{App, Console, GameConfig, Statistics, persistence};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.apply_overrides(GameConfig::load_or_default(&cli.config)?);
    config.validate()?;
    info!(?config, "Configuration resolved");

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut app = App::new(console, config.clone());

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => app.run(),
        Command::Play {
            size,
            mode,
            difficulty,
        } => {
            let size = size.unwrap_or(*config.default_size());
            let difficulty = difficulty.unwrap_or(*config.difficulty());
            app.new_game(size, mode, difficulty)
        }
        Command::Load => app.load_game(),
        Command::Stats { json } => show_saved_stats(&config, json),
    }
}

/// Prints the counters stored in the save file.
#[instrument(skip(config))]
fn show_saved_stats(config: &GameConfig, json: bool) -> Result<()> {
    let saved = persistence::load_game(config.save_path())?;
    let mut stats = Statistics::new();
    stats.restore_counters(saved.counters);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.summary());
    }
    Ok(())
}
