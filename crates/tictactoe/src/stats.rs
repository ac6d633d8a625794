//! Running tally of finished games.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tictactoe_core::{GameOutcome, Player, WinPattern};
use tracing::{debug, instrument, warn};

/// The four counters stored in a save file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StatCounters {
    /// Finished games.
    pub games_played: u32,
    /// Games won by X.
    pub wins_x: u32,
    /// Games won by O.
    pub wins_o: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Statistics for the running application, passed into each session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Statistics {
    games_played: u32,
    wins_x: u32,
    wins_o: u32,
    draws: u32,
    /// How each won game was won, oldest first.
    win_patterns: Vec<WinPattern>,
}

impl Statistics {
    /// Creates empty statistics.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. Ongoing outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome, pattern: Option<WinPattern>) {
        match outcome {
            GameOutcome::Ongoing => {
                warn!("Attempted to record an unfinished game");
                return;
            }
            GameOutcome::Win(Player::X) => self.wins_x = self.wins_x.saturating_add(1),
            GameOutcome::Win(Player::O) => self.wins_o = self.wins_o.saturating_add(1),
            GameOutcome::Draw => self.draws = self.draws.saturating_add(1),
        }
        self.games_played = self.games_played.saturating_add(1);

        if let (GameOutcome::Win(_), Some(pattern)) = (outcome, pattern) {
            self.win_patterns.push(pattern);
        }
        debug!(games_played = self.games_played, "Game recorded");
    }

    /// The counters persisted in save files.
    pub fn counters(&self) -> StatCounters {
        StatCounters::new(self.games_played, self.wins_x, self.wins_o, self.draws)
    }

    /// Replaces the counters with loaded values. Save files carry no
    /// pattern log, so the log is cleared.
    #[instrument(skip(self))]
    pub fn restore_counters(&mut self, counters: StatCounters) {
        self.win_patterns.clear();
        self.games_played = counters.games_played;
        self.wins_x = counters.wins_x;
        self.wins_o = counters.wins_o;
        self.draws = counters.draws;
    }

    /// Number of wins per pattern kind.
    pub fn pattern_breakdown(&self) -> BTreeMap<String, usize> {
        let mut breakdown = BTreeMap::new();
        for pattern in &self.win_patterns {
            *breakdown.entry(pattern.to_string()).or_insert(0) += 1;
        }
        breakdown
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let rule = "===================================\n";
        let mut text = String::new();
        text.push_str(rule);
        text.push_str("         GAME STATISTICS\n");
        text.push_str(rule);
        text.push_str(&format!("Games Played: {}\n", self.games_played));
        text.push_str(&format!("Player X Wins: {}\n", self.wins_x));
        text.push_str(&format!("Player O Wins: {}\n", self.wins_o));
        text.push_str(&format!("Draws: {}\n", self.draws));
        text.push_str(&format!(
            "Total Win Patterns Recorded: {}\n",
            self.win_patterns.len()
        ));
        for (pattern, count) in self.pattern_breakdown() {
            text.push_str(&format!("  {pattern}: {count}\n"));
        }
        text.push_str(rule);
        text
    }
}
