//! Rule-based move finder: win, block, center, corner, then random.

use super::random::random_empty_cell;
use crate::rules::lines;
use crate::types::{Board, Cell, Coord, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tactic {
    /// Completes one of the AI's lines.
    #[strum(to_string = "Winning move!")]
    Win,
    /// Fills the opponent's only gap in a line.
    #[strum(to_string = "Blocking move!")]
    Block,
    /// Takes the center of an odd-sized board.
    #[strum(to_string = "Center move!")]
    Center,
    /// Takes the first free corner.
    #[strum(to_string = "Corner move!")]
    Corner,
    /// Nothing better was found.
    #[strum(to_string = "Random move")]
    Random,
}

/// Finds the empty cell that would complete a line for `player`.
///
/// A line qualifies when `player` holds N-1 of its cells and the last one
/// is empty. Lines are scanned rows first, then columns, then the main
/// diagonal and the anti-diagonal; the first qualifying line wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_cell(board: &Board, player: Player) -> Option<Coord> {
    let size = board.size();
    let mark = Cell::Occupied(player);

    lines(size).find_map(|line| {
        let cells = line.cells(size);
        let owned = cells.iter().filter(|coord| board.get(**coord) == mark).count();
        let mut empty = cells.into_iter().filter(|coord| board.is_empty(*coord));
        match (owned == size - 1, empty.next()) {
            (true, Some(gap)) => Some(gap),
            _ => None,
        }
    })
}

/// Chooses a move for `ai` by the first rule that applies:
/// win, block, center (odd sizes), first free corner, random.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn heuristic_move<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<(Coord, Tactic)> {
    let choice = find_winning_cell(board, ai)
        .map(|coord| (coord, Tactic::Win))
        .or_else(|| find_winning_cell(board, ai.opponent()).map(|coord| (coord, Tactic::Block)))
        .or_else(|| {
            board
                .center()
                .filter(|center| board.is_empty(*center))
                .map(|center| (center, Tactic::Center))
        })
        .or_else(|| {
            board
                .corners()
                .into_iter()
                .find(|corner| board.is_empty(*corner))
                .map(|corner| (corner, Tactic::Corner))
        })
        .or_else(|| random_empty_cell(board, rng).map(|coord| (coord, Tactic::Random)));

    if let Some((coord, tactic)) = choice {
        debug!(%coord, ?tactic, "Heuristic move selected");
    }
    choice
}
