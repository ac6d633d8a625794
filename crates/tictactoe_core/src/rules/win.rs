//! Win detection logic for N x N tic-tac-toe.
//!
//! A player wins by filling an entire row, column or diagonal. Lines are
//! always checked in the same order: rows top to bottom, columns left to
//! right, the main diagonal, then the anti-diagonal.

use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of line completed a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum WinPattern {
    /// A full row.
    #[strum(to_string = "row")]
    Row(usize),
    /// A full column.
    #[strum(to_string = "column")]
    Column(usize),
    /// Top-left to bottom-right.
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl WinPattern {
    /// Coordinates covered by this line on a board of the given size.
    pub fn cells(self, size: usize) -> Vec<Coord> {
        match self {
            WinPattern::Row(row) => (0..size).map(|col| Coord::new(row, col)).collect(),
            WinPattern::Column(col) => (0..size).map(|row| Coord::new(row, col)).collect(),
            WinPattern::MainDiagonal => (0..size).map(|i| Coord::new(i, i)).collect(),
            WinPattern::AntiDiagonal => (0..size).map(|i| Coord::new(i, size - 1 - i)).collect(),
        }
    }
}

/// Every candidate line of a board in checking order (2N + 2 lines).
pub fn lines(size: usize) -> impl Iterator<Item = WinPattern> {
    (0..size)
        .map(WinPattern::Row)
        .chain((0..size).map(WinPattern::Column))
        .chain([WinPattern::MainDiagonal, WinPattern::AntiDiagonal])
}

/// Returns the first line entirely filled by `player`, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinPattern> {
    let size = board.size();
    let mark = Cell::Occupied(player);
    lines(size).find(|line| line.cells(size).into_iter().all(|coord| board.get(coord) == mark))
}

/// Checks whether `player` has completed any line.
pub fn has_win(board: &Board, player: Player) -> bool {
    let size = board.size();
    let mark = Cell::Occupied(player);
    let owned = |row: usize, col: usize| board.get(Coord::new(row, col)) == mark;

    (0..size).any(|row| (0..size).all(|col| owned(row, col)))
        || (0..size).any(|col| (0..size).all(|row| owned(row, col)))
        || (0..size).all(|i| owned(i, i))
        || (0..size).all(|i| owned(i, size - 1 - i))
}

/// Checks if there is a winner on the board, testing X before O.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_win(board, *player))
}
