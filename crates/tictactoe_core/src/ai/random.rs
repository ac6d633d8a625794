//! Uniform random move selection.

use crate::types::{Board, Coord};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks an empty cell uniformly at random, or `None` on a full board.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    board.empty_cells().choose(rng).copied()
}
