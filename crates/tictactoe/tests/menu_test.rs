//! End-to-end menu flows over scripted input.

use std::io::Cursor;
use std::path::Path;
use tictactoe::persistence::load_game;
use tictactoe::{App, Console, GameConfig, StatCounters};

fn config_in(dir: &Path) -> GameConfig {
    GameConfig::default()
        .with_save_path(dir.join("savegame.txt"))
        .with_stats_path(dir.join("statistics.txt"))
        .with_seed(Some(1))
}

fn run_menu(config: GameConfig, script: &str) -> String {
    let mut app = App::new(Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()), config);
    app.run().expect("Menu failed");
    String::from_utf8(app.into_console().into_output()).expect("UTF-8 output")
}

#[test]
fn test_new_game_save_then_load() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_in(dir.path());

    // New game, 3x3, player vs player, X takes the top row, save, exit
    let script = "1\n3\n1\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\ny\n4\n";
    let out = run_menu(config.clone(), script);
    assert!(out.contains("*** Player X wins! ***"));
    assert!(out.contains("Game saved successfully!"));
    assert!(out.contains("Thank you for playing! Final statistics:"));

    let saved = load_game(config.save_path()).expect("Load failed");
    assert_eq!(saved.counters, StatCounters::new(1, 1, 0, 0));
    let rows: Vec<String> = saved.board.rows().collect();
    assert_eq!(rows, ["XXX", "OO ", "   "]);

    let exported = std::fs::read_to_string(config.stats_path()).expect("Read failed");
    assert!(exported.contains("Player X Wins: 1"));

    // A fresh run loads the finished game and its counters
    let out = run_menu(config, "2\n3\n4\n");
    assert!(out.contains("Game loaded successfully!"));
    assert!(out.contains("Board size: 3 x 3"));
    assert!(out.contains("This game is already finished."));
    assert!(out.contains("Games Played: 1"));
}

#[test]
fn test_load_without_save_file_reports_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = run_menu(config_in(dir.path()), "2\n4\n");
    assert!(out.contains("Error loading game. Make sure"));
    assert!(out.contains("Games Played: 0"));
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = run_menu(config_in(dir.path()), "9\nhello\n3\n4\n");
    assert_eq!(out.matches("Invalid choice!").count(), 2);
    assert_eq!(out.matches("--- MAIN MENU ---").count(), 2);
}

#[test]
fn test_resume_saved_game_against_ai() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_in(dir.path()).with_difficulty(tictactoe_core::Difficulty::Hard);
    std::fs::write(config.save_path(), "3\nXX \nOO \n   \n0 0 0 0\n").expect("Write failed");

    // Resume with X to move; X completes the top row
    let out = run_menu(config.clone(), "2\ny\n0\n2\nn\n4\n");
    assert!(out.contains("*** Player X wins! ***"));
    assert!(out.contains("Player X Wins: 1"));

    // Declined save leaves the file untouched
    let saved = load_game(config.save_path()).expect("Load failed");
    assert_eq!(saved.counters, StatCounters::new(0, 0, 0, 0));
}

#[test]
fn test_exit_on_closed_input_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut app = App::new(Console::new(Cursor::new(b"3\n".to_vec()), Vec::new()), config_in(dir.path()));
    assert!(app.run().is_err());
}
