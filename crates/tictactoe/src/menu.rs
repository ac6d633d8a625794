//! The interactive main menu.

use crate::config::GameConfig;
use crate::console::Console;
use crate::persistence::{self, SavedGame};
use crate::session::{GameSession, Mode, participants};
use crate::stats::Statistics;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tictactoe_core::{Board, Difficulty, Game, MAX_SIZE, MIN_SIZE};
use tracing::{info, instrument, warn};

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a new game.
    NewGame,
    /// Load the saved game.
    LoadGame,
    /// Print the statistics.
    ViewStatistics,
    /// Quit.
    Exit,
}

impl MenuChoice {
    /// Maps a menu number (1-4) to an entry.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::NewGame),
            2 => Some(Self::LoadGame),
            3 => Some(Self::ViewStatistics),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Application state shared across menu actions.
pub struct App<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    stats: Statistics,
    rng: StdRng,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an app with empty statistics.
    #[instrument(skip_all)]
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self {
            console,
            config,
            stats: Statistics::new(),
            rng,
        }
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Consumes the app, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the user exits.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.console.say("===================================")?;
        self.console.say("   TIC-TAC-TOE: N x N EDITION")?;
        self.console.say("===================================")?;

        loop {
            self.console.say("\n--- MAIN MENU ---")?;
            self.console.say("1. New Game")?;
            self.console.say("2. Load Game")?;
            self.console.say("3. View Statistics")?;
            self.console.say("4. Exit")?;

            let n = self.console.ask_in_range("Enter your choice (1-4): ", 1u8..=4)?;
            match MenuChoice::from_number(n) {
                Some(MenuChoice::NewGame) => self.new_game_interactive()?,
                Some(MenuChoice::LoadGame) => self.load_game()?,
                Some(MenuChoice::ViewStatistics) => self.show_stats()?,
                Some(MenuChoice::Exit) | None => break,
            }
        }

        self.console.say("\nThank you for playing! Final statistics:")?;
        self.show_stats()?;
        info!("Exiting");
        Ok(())
    }

    /// Asks for size, mode and difficulty, then plays a game.
    pub fn new_game_interactive(&mut self) -> Result<()> {
        let size = self.console.ask_in_range(
            &format!("Enter board size ({}-{}): ", MIN_SIZE, MAX_SIZE),
            MIN_SIZE..=MAX_SIZE,
        )?;

        self.console.say("\nGame mode:")?;
        self.console.say("1. Player vs Player")?;
        self.console.say("2. Player vs AI")?;
        let mode = Mode::from_choice(self.console.ask_in_range("Choose mode (1-2): ", 1u8..=2)?)
            .unwrap_or_default();

        let difficulty = match mode {
            Mode::PlayerVsAi => {
                self.console.say("\nDifficulty:")?;
                for level in Difficulty::iter() {
                    self.console
                        .say(format!("{}. {} - {}", level.level(), level, level.description()))?;
                }
                let n = self.console.ask_in_range("Choose difficulty (1-3): ", 1u8..=3)?;
                Difficulty::from_level(n).unwrap_or(*self.config.difficulty())
            }
            Mode::PlayerVsPlayer => *self.config.difficulty(),
        };

        self.new_game(size, mode, difficulty)
    }

    /// Plays a new game with the given settings and offers to save it.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize, mode: Mode, difficulty: Difficulty) -> Result<()> {
        let game = Game::new(size)?;
        self.console.say(format!("\nStarting a new {0} x {0} game.", size))?;
        let finished = self.play(game, mode, difficulty)?;
        self.offer_save(finished.board())
    }

    /// Loads the save file, shows it and offers to resume play.
    #[instrument(skip(self))]
    pub fn load_game(&mut self) -> Result<()> {
        let path = self.config.save_path().clone();
        self.console
            .say(format!("Loading game from '{}'...", path.display()))?;

        let SavedGame { board, counters } = match persistence::load_game(&path) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Load failed");
                self.console.say(format!(
                    "Error loading game. Make sure '{}' exists.",
                    path.display()
                ))?;
                return Ok(());
            }
        };

        self.stats.restore_counters(counters);
        self.console.say("Game loaded successfully!")?;
        self.console
            .say(format!("Board size: {0} x {0}", board.size()))?;
        self.console.say(&board)?;
        self.console.say(format!(
            "Games played: {}, X wins: {}, O wins: {}, draws: {}",
            counters.games_played, counters.wins_x, counters.wins_o, counters.draws
        ))?;

        let game = Game::from_board(board);
        if game.outcome().is_over() {
            self.console.say("This game is already finished.")?;
            return Ok(());
        }
        if self.console.ask_yes_no("Resume this game? (y/n): ")? {
            let difficulty = *self.config.difficulty();
            let finished = self.play(game, Mode::PlayerVsAi, difficulty)?;
            self.offer_save(finished.board())?;
        }
        Ok(())
    }

    /// Prints the statistics summary.
    pub fn show_stats(&mut self) -> Result<()> {
        let summary = self.stats.summary();
        self.console.say(summary)?;
        Ok(())
    }

    /// Plays `game` to the end and returns the finished game.
    fn play(&mut self, game: Game, mode: Mode, difficulty: Difficulty) -> Result<Game> {
        let seed = self.rng.next_u64();
        let (x, o) = participants(mode, difficulty, *self.config.ai_mark(), seed);
        let mut session = GameSession::new(game, x, o);
        session.play(&mut self.console, &mut self.stats)?;
        Ok(session.into_game())
    }

    fn offer_save(&mut self, board: &Board) -> Result<()> {
        if !self.console.ask_yes_no("Save game? (y/n): ")? {
            return Ok(());
        }

        let saved = persistence::save_game(self.config.save_path(), board, &self.stats.counters())
            .and_then(|()| persistence::export_statistics(self.config.stats_path(), &self.stats));
        match saved {
            Ok(()) => self.console.say("Game saved successfully!")?,
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.console.say("Error saving game.")?;
            }
        }
        Ok(())
    }
}
