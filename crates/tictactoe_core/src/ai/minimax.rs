//! Depth-limited minimax search.
//!
//! The AI is the maximizing side. Terminal positions are scored from the
//! AI's point of view, with the search depth folded in so that faster wins
//! and slower losses rank higher:
//!
//! | position          | score          |
//! |-------------------|----------------|
//! | AI line complete  | `10 - depth`   |
//! | opponent line     | `-10 + depth`  |
//! | board full        | `0`            |
//! | past cutoff depth | [`Minimax::evaluate`] |
//!
//! Children are generated in row-major order by placing a mark on the
//! working board, recursing, and emptying the cell again, so a search
//! never copies the board.

use crate::rules::{has_win, is_full};
use crate::types::{Board, Cell, Coord, Player};
use tracing::{debug, instrument};

/// Deepest ply expanded before falling back to [`Minimax::evaluate`].
pub const CUTOFF_DEPTH: u32 = 4;

/// Base score of a completed line.
pub const WIN_SCORE: i32 = 10;

const UNSET: i32 = 10_000;

/// Best move found at a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen cell; `None` at leaves.
    pub best: Option<Coord>,
    /// Minimax value of the node.
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { best: None, score }
    }
}

/// Minimax engine for one AI mark against one opponent mark.
#[derive(Debug, Clone)]
pub struct Minimax {
    ai: Player,
    opponent: Player,
    nodes: u64,
}

impl Minimax {
    /// Creates an engine searching on behalf of `ai`.
    pub fn new(ai: Player, opponent: Player) -> Self {
        Self {
            ai,
            opponent,
            nodes: 0,
        }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches for the AI's best move, starting at depth 0 with the AI
    /// to move. The board is returned to its original contents.
    #[instrument(skip(self, board), fields(ai = ?self.ai, size = board.size()))]
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;
        let result = self.minimax(board, 0, true);
        debug!(
            nodes = self.nodes,
            best = ?result.best,
            score = result.score,
            "Minimax search complete"
        );
        result
    }

    fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> SearchResult {
        self.nodes += 1;
        let plies = depth as i32;

        if has_win(board, self.ai) {
            return SearchResult::leaf(WIN_SCORE - plies);
        }
        if has_win(board, self.opponent) {
            return SearchResult::leaf(-WIN_SCORE + plies);
        }
        if is_full(board) {
            return SearchResult::leaf(0);
        }
        if depth > CUTOFF_DEPTH {
            return SearchResult::leaf(self.evaluate(board));
        }

        let mover = if maximizing { self.ai } else { self.opponent };
        let mut best = SearchResult {
            best: None,
            score: if maximizing { -UNSET } else { UNSET },
        };

        for coord in board.empty_cells() {
            let child = board.with_placed(coord, mover, |board| {
                self.minimax(board, depth + 1, !maximizing)
            });

            // Strict comparison: ties keep the earliest cell.
            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves {
                best = SearchResult {
                    best: Some(coord),
                    score: child.score,
                };
            }
        }

        best
    }

    /// Static evaluation used past the cutoff depth.
    ///
    /// Only rows are considered. A row with at least one empty cell and no
    /// opponent mark adds the AI's mark count to the AI tally; a row with
    /// at least one empty cell and no AI mark adds the opponent's count to
    /// the opponent tally. The result is `2 * ai - 3 * opponent`.
    pub fn evaluate(&self, board: &Board) -> i32 {
        let ai_mark = Cell::Occupied(self.ai);
        let opponent_mark = Cell::Occupied(self.opponent);
        let (mut ai_tally, mut opponent_tally) = (0i32, 0i32);

        for row in 0..board.size() {
            let cells = board.row(row);
            let ai_in_row = cells.iter().filter(|cell| **cell == ai_mark).count() as i32;
            let opponent_in_row = cells.iter().filter(|cell| **cell == opponent_mark).count() as i32;
            let open = cells.contains(&Cell::Empty);

            if opponent_in_row == 0 && open {
                ai_tally += ai_in_row;
            }
            if ai_in_row == 0 && open {
                opponent_tally += opponent_in_row;
            }
        }

        2 * ai_tally - 3 * opponent_tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows.len(), rows).unwrap()
    }

    #[test]
    fn test_evaluate_counts_open_rows() {
        let engine = Minimax::new(Player::O, Player::X);
        assert_eq!(engine.evaluate(&board(&["O  ", "O  ", "   "])), 4);
        assert_eq!(engine.evaluate(&board(&["OX ", "O  ", "   "])), 2);
        assert_eq!(engine.evaluate(&board(&["X  ", "XX ", "   "])), -9);
    }

    #[test]
    fn test_evaluate_ignores_full_rows() {
        let engine = Minimax::new(Player::X, Player::O);
        assert_eq!(engine.evaluate(&board(&["XXO", "X  ", "   "])), 2);
    }

    #[test]
    fn test_evaluate_ignores_columns_and_diagonals() {
        // A column of two AI marks scores the same as two scattered rows.
        let engine = Minimax::new(Player::X, Player::O);
        let column = board(&["X  ", "X  ", "   "]);
        let scattered = board(&["X  ", "  X", "   "]);
        assert_eq!(engine.evaluate(&column), engine.evaluate(&scattered));
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let mut b = board(&["XXX", "OO ", "   "]);
        let mut engine = Minimax::new(Player::O, Player::X);
        let result = engine.search(&mut b);
        assert_eq!(result, SearchResult { best: None, score: -10 });
        assert_eq!(engine.nodes(), 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board(&["OO ", "XX ", "   "]);
        let result = Minimax::new(Player::O, Player::X).search(&mut b);
        assert_eq!(result.best, Some(Coord::new(0, 2)));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_last_cell_draw() {
        let mut b = board(&["XXO", "OOX", "X  "]);
        let mut engine = Minimax::new(Player::X, Player::O);
        let result = engine.search(&mut b);
        assert_eq!(result.best, Some(Coord::new(2, 1)));
        assert_eq!(result.score, 0);
        // root, two replies, one forced follow-up each
        assert_eq!(engine.nodes(), 5);
    }

    #[test]
    fn test_search_restores_board() {
        let mut b = board(&["X  ", " O ", "   "]);
        let before = b.clone();
        Minimax::new(Player::X, Player::O).search(&mut b);
        assert_eq!(b, before);
    }
}
