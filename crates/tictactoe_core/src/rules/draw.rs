//! Draw detection logic for N x N tic-tac-toe.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    (0..board.size()).all(|row| board.row(row).iter().all(|cell| *cell != Cell::Empty))
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::{Coord, Player};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3).unwrap();
        board.set(Coord::new(1, 1), Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_single_gap_not_full() {
        let board = Board::from_rows(4, &["XOXO", "OXOX", "XOXO", "OXO "]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows(3, &["XOX", "OXX", "OXO"]).unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows(3, &["XXX", "OOX", "XOO"]).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
