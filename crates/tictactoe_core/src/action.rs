//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who played
//! where and, for searched moves, the score the engine assigned.

use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark is placed.
    pub coord: Coord,
    /// Score assigned by the minimax engine, if the move came from a search.
    pub score: Option<i32>,
}

impl Move {
    /// Creates a new unscored move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self {
            player,
            coord,
            score: None,
        }
    }

    /// Attaches a search score.
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)?;
        if let Some(score) = self.score {
            write!(f, " (score {score})")?;
        }
        Ok(())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is off the board.
    #[display("Coordinate {_0} is off the board")]
    OutOfBounds(Coord),

    /// The cell is already occupied.
    #[display("Cell {_0} is already occupied")]
    Occupied(Coord),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
