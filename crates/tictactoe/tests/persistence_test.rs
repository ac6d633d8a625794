//! Tests for save files and statistics export.

use tempfile::TempDir;
use tictactoe::persistence::{export_statistics, load_game, save_game};
use tictactoe::{PersistErrorKind, StatCounters, Statistics};
use tictactoe_core::{Board, GameOutcome, Player, WinPattern};

fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_saved_game_loads_back() {
    let dir = scratch_dir();
    let path = dir.path().join("savegame.txt");
    let board = Board::from_rows(4, &["X  O", " X  ", "  O ", "    "]).expect("Valid board");
    let counters = StatCounters::new(7, 3, 2, 2);

    save_game(&path, &board, &counters).expect("Save failed");
    let saved = load_game(&path).expect("Load failed");

    assert_eq!(saved.board, board);
    assert_eq!(saved.counters, counters);
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = scratch_dir();
    let path = dir.path().join("savegame.txt");
    let first = Board::from_rows(3, &["X  ", "   ", "   "]).expect("Valid board");
    let second = Board::new(5).expect("Valid size");

    save_game(&path, &first, &StatCounters::new(1, 1, 0, 0)).expect("Save failed");
    save_game(&path, &second, &StatCounters::new(2, 1, 0, 1)).expect("Save failed");

    let saved = load_game(&path).expect("Load failed");
    assert_eq!(saved.board.size(), 5);
    assert_eq!(saved.counters.draws, 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = scratch_dir();
    let err = load_game(dir.path().join("nope.txt")).expect_err("Load should fail");
    assert_eq!(err.kind, PersistErrorKind::Io);
}

#[test]
fn test_truncated_file_is_format_error() {
    let dir = scratch_dir();
    let path = dir.path().join("savegame.txt");
    std::fs::write(&path, "3\nX  \n O \n").expect("Write failed");

    let err = load_game(&path).expect_err("Load should fail");
    assert_eq!(err.kind, PersistErrorKind::Format);
}

#[test]
fn test_export_statistics_text() {
    let dir = scratch_dir();
    let path = dir.path().join("statistics.txt");
    let mut stats = Statistics::new();
    stats.record(GameOutcome::Win(Player::X), Some(WinPattern::Column(2)));
    stats.record(GameOutcome::Draw, None);

    export_statistics(&path, &stats).expect("Export failed");
    let text = std::fs::read_to_string(&path).expect("Read failed");

    assert!(text.starts_with("=== GAME STATISTICS ===\n"));
    assert!(text.contains("Games Played: 2\n"));
    assert!(text.contains("Player X Wins: 1\n"));
    assert!(text.contains("Draws: 1\n"));
    assert!(text.contains("  column: 1\n"));
}
