//! Game rules for N x N tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the AI can evaluate hypothetical positions cheaply.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinPattern, check_winner, has_win, lines, winning_line};

use crate::types::{Board, GameOutcome};
use tracing::instrument;

/// Derives the outcome of a position from the board alone.
///
/// X is checked before O; a full board with no line is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_outcome_variants() {
        let ongoing = Board::from_rows(3, &["X  ", " O ", "   "]).unwrap();
        assert_eq!(outcome(&ongoing), GameOutcome::Ongoing);

        let won = Board::from_rows(3, &["X O", "XO ", "O X"]).unwrap();
        assert_eq!(outcome(&won), GameOutcome::Win(Player::O));

        let drawn = Board::from_rows(3, &["XOX", "OXX", "OXO"]).unwrap();
        assert_eq!(outcome(&drawn), GameOutcome::Draw);
    }
}
