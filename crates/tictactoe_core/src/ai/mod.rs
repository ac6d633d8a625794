//! Computer opponents.
//!
//! Three strategies of increasing strength sit behind [`choose_move`]:
//!
//! - [`Difficulty::Easy`]: a uniformly random empty cell.
//! - [`Difficulty::Medium`]: [`heuristic::heuristic_move`] (win, block,
//!   center, corner, random).
//! - [`Difficulty::Hard`]: [`minimax::Minimax`] search.

pub mod heuristic;
pub mod minimax;
pub mod random;

pub use heuristic::{Tactic, find_winning_cell, heuristic_move};
pub use minimax::{CUTOFF_DEPTH, Minimax, SearchResult};
pub use random::random_empty_cell;

use crate::types::{Board, Coord, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI strength, numbered 1-3 in menus.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Block/win strategy.
    #[default]
    Medium,
    /// Minimax search.
    Hard,
}

impl Difficulty {
    /// Maps a menu level (1-3) to a difficulty.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Menu level (1-3) of this difficulty.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Short description shown in menus.
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Random moves",
            Difficulty::Medium => "Block/Win strategy",
            Difficulty::Hard => "Minimax algorithm",
        }
    }
}

/// A move chosen by the AI, with the reasoning behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiDecision {
    /// Cell to play.
    pub coord: Coord,
    /// Rule that fired, for heuristic moves.
    pub tactic: Option<Tactic>,
    /// Search score, for minimax moves.
    pub score: Option<i32>,
}

/// Errors raised when asking the AI for a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AiError {
    /// The board has no empty cell.
    #[display("No legal move available")]
    NoLegalMove,

    /// A line is already complete, so there is nothing to search.
    #[display("Position is already decided")]
    PositionDecided,

    /// AI and opponent were given the same mark.
    #[display("AI and opponent both play {_0}")]
    SameMarks(Player),
}

impl std::error::Error for AiError {}

/// Picks a move for `ai` at the given difficulty.
///
/// The board is not modified; the caller applies the returned cell.
/// Hard difficulty never draws from `rng`, so its choice depends on the
/// board alone.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    opponent: Player,
    rng: &mut R,
) -> Result<AiDecision, AiError> {
    if ai == opponent {
        return Err(AiError::SameMarks(ai));
    }

    let decision = match difficulty {
        Difficulty::Easy => {
            let coord = random_empty_cell(board, rng).ok_or(AiError::NoLegalMove)?;
            AiDecision {
                coord,
                tactic: None,
                score: None,
            }
        }
        Difficulty::Medium => {
            let (coord, tactic) = heuristic_move(board, ai, rng).ok_or(AiError::NoLegalMove)?;
            AiDecision {
                coord,
                tactic: Some(tactic),
                score: None,
            }
        }
        Difficulty::Hard => {
            if board.empty_cells().is_empty() {
                return Err(AiError::NoLegalMove);
            }
            let mut scratch = board.clone();
            let result = Minimax::new(ai, opponent).search(&mut scratch);
            let coord = result.best.ok_or(AiError::PositionDecided)?;
            AiDecision {
                coord,
                tactic: None,
                score: Some(result.score),
            }
        }
    };

    debug!(%difficulty, coord = %decision.coord, "AI decision");
    Ok(decision)
}
