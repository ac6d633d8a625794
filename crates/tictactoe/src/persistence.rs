//! Plain-text save files.
//!
//! A save file holds the board size on the first line, then one line per
//! board row with one character per cell (blank for empty, `X`, `O`),
//! then the four statistics counters separated by spaces:
//!
//! ```text
//! 3
//! X O
//!  X
//! O
//! 4 2 1 1
//! ```
//!
//! Loading is all-or-nothing: a missing or malformed token fails the load.

use crate::stats::{StatCounters, Statistics};
use derive_more::Display;
use std::path::Path;
use tictactoe_core::Board;
use tracing::{debug, info, instrument, warn};

/// A board and its counters as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    /// The saved board.
    pub board: Board,
    /// The saved statistics counters.
    pub counters: StatCounters,
}

/// What went wrong with a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PersistErrorKind {
    /// The file could not be opened, read or written.
    #[display("I/O")]
    Io,
    /// The file was read but its contents are malformed.
    #[display("format")]
    Format,
}

/// Save file error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Save file {} error: {} at {}:{}", kind, message, file, line)]
pub struct PersistError {
    /// Category of failure.
    pub kind: PersistErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PersistError {
    /// Creates a new save file error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: PersistErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    #[track_caller]
    fn io(path: &Path, err: std::io::Error) -> Self {
        Self::new(PersistErrorKind::Io, format!("{}: {}", path.display(), err))
    }

    #[track_caller]
    fn format(message: impl Into<String>) -> Self {
        Self::new(PersistErrorKind::Format, message)
    }
}

/// Renders a board and counters in save file format.
pub fn encode(board: &Board, counters: &StatCounters) -> String {
    let mut text = format!("{}\n", board.size());
    for row in board.rows() {
        text.push_str(&row);
        text.push('\n');
    }
    text.push_str(&format!(
        "{} {} {} {}\n",
        counters.games_played, counters.wins_x, counters.wins_o, counters.draws
    ));
    text
}

/// Parses save file contents.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn decode(text: &str) -> Result<SavedGame, PersistError> {
    let mut lines = text.lines();

    let size_line = lines.next().ok_or_else(|| PersistError::format("missing board size"))?;
    let size: usize = size_line
        .trim()
        .parse()
        .map_err(|_| PersistError::format(format!("invalid board size {:?}", size_line.trim())))?;

    let rows: Vec<&str> = lines.by_ref().take(size).collect();
    let board = Board::from_rows(size, &rows).map_err(|e| PersistError::format(e.to_string()))?;

    let stats_line = lines
        .next()
        .ok_or_else(|| PersistError::format("missing statistics line"))?;
    let values = stats_line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| PersistError::format(format!("invalid counter {:?}", token)))
        })
        .collect::<Result<Vec<u32>, _>>()?;
    let [games_played, wins_x, wins_o, draws] = values[..] else {
        return Err(PersistError::format(format!(
            "expected 4 counters, found {}",
            values.len()
        )));
    };

    debug!(size, "Save file decoded");
    Ok(SavedGame {
        board,
        counters: StatCounters::new(games_played, wins_x, wins_o, draws),
    })
}

/// Writes the board and counters to `path`, replacing any existing file.
#[instrument(skip(board, counters), fields(path = %path.as_ref().display(), size = board.size()))]
pub fn save_game(
    path: impl AsRef<Path>,
    board: &Board,
    counters: &StatCounters,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    std::fs::write(path, encode(board, counters)).map_err(|e| {
        warn!(error = %e, "Failed to write save file");
        PersistError::io(path, e)
    })?;
    info!("Game saved");
    Ok(())
}

/// Reads a save file written by [`save_game`].
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_game(path: impl AsRef<Path>) -> Result<SavedGame, PersistError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PersistError::io(path, e))?;
    let saved = decode(&text)?;
    info!(size = saved.board.size(), "Game loaded");
    Ok(saved)
}

/// Writes a human-readable statistics summary to `path`.
#[instrument(skip(stats), fields(path = %path.as_ref().display()))]
pub fn export_statistics(path: impl AsRef<Path>, stats: &Statistics) -> Result<(), PersistError> {
    let path = path.as_ref();
    let mut text = String::from("=== GAME STATISTICS ===\n");
    text.push_str(&format!("Games Played: {}\n", stats.games_played()));
    text.push_str(&format!("Player X Wins: {}\n", stats.wins_x()));
    text.push_str(&format!("Player O Wins: {}\n", stats.wins_o()));
    text.push_str(&format!("Draws: {}\n", stats.draws()));
    text.push_str(&format!("Win Patterns: {}\n", stats.win_patterns().len()));
    for (pattern, count) in stats.pattern_breakdown() {
        text.push_str(&format!("  {pattern}: {count}\n"));
    }

    std::fs::write(path, text).map_err(|e| PersistError::io(path, e))?;
    info!("Statistics exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let board = Board::from_rows(3, &["X O", " X ", "O  "]).unwrap();
        let text = encode(&board, &StatCounters::new(4, 2, 1, 1));
        assert_eq!(text, "3\nX O\n X \nO  \n4 2 1 1\n");
    }

    #[test]
    fn test_decode_tolerates_stripped_trailing_blanks_and_crlf() {
        let saved = decode("3\r\nX O\r\n X\r\nO\r\n4 2 1 1\r\n").unwrap();
        let rows: Vec<String> = saved.board.rows().collect();
        assert_eq!(rows, ["X O", " X ", "O  "]);
        assert_eq!(saved.counters, StatCounters::new(4, 2, 1, 1));
    }

    #[test]
    fn test_decode_rejects_missing_tokens() {
        for text in [
            "",
            "three\n",
            "3\nX  \n   \n",
            "3\nX  \n   \n   \n",
            "3\nX  \n   \n   \n1 2 3\n",
            "3\nX  \n   \n   \n1 2 3 4 5\n",
            "3\nX  \n   \n   \n1 2 three 4\n",
            "2\n  \n  \n0 0 0 0\n",
            "3\nXQ \n   \n   \n0 0 0 0\n",
        ] {
            let err = decode(text).unwrap_err();
            assert_eq!(err.kind, PersistErrorKind::Format, "accepted {text:?}");
        }
    }
}
