//! Tic-tac-toe core - N x N game logic and computer opponents.
//!
//! This crate has no console or file I/O. It provides:
//!
//! - **Board**: an N x N grid (3 <= N <= 15) in one row-major buffer
//! - **Rules**: win detection over rows, columns and both diagonals; draws
//! - **Game**: apply moves, query legal moves and the outcome
//! - **AI**: random, heuristic and minimax strategies behind one dispatcher
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_core::{Coord, Difficulty, Game, GameOutcome, Player, choose_move};
//!
//! let mut game = Game::new(3)?;
//! game.apply_move(Coord::new(0, 0))?;
//! game.apply_move(Coord::new(1, 1))?;
//! game.apply_move(Coord::new(0, 1))?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let decision = choose_move(game.board(), Difficulty::Hard, Player::O, Player::X, &mut rng)?;
//! assert_eq!(decision.coord, Coord::new(0, 2));
//! assert_eq!(game.apply_move(decision.coord)?, GameOutcome::Ongoing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod types;

pub mod ai;
pub mod rules;

pub use action::{Move, MoveError};
pub use ai::{AiDecision, AiError, Difficulty, Tactic, choose_move};
pub use game::Game;
pub use rules::WinPattern;
pub use types::{Board, BoardError, Cell, Coord, GameOutcome, MAX_SIZE, MIN_SIZE, Player};
