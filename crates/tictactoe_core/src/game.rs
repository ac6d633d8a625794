//! Game engine for N x N tic-tac-toe.
//!
//! [`Game`] is the request/response surface the console layer talks to:
//! apply a move, query legal moves, query the outcome.

use crate::action::{Move, MoveError};
use crate::rules::{self, WinPattern};
use crate::types::{Board, BoardError, Cell, Coord, GameOutcome, Player};
use tracing::{debug, info, instrument};

/// A single game: board, side to move, outcome and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    /// Cache of `rules::outcome(&board)`, refreshed after every move.
    outcome: GameOutcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty `size` x `size` board. X moves first.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Resumes a game from an existing board.
    ///
    /// X moves when both sides have the same number of marks, otherwise O.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_board(board: Board) -> Self {
        let to_move = if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        };
        let outcome = rules::outcome(&board);
        debug!(?to_move, ?outcome, "Game initialised from board");
        Self {
            board,
            to_move,
            outcome,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Moves applied since this game was created or resumed.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_over() {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinPattern> {
        match self.outcome {
            GameOutcome::Win(winner) => rules::winning_line(&self.board, winner),
            _ => None,
        }
    }

    /// Places the mark of the player to move at `coord`.
    ///
    /// The mover's lines are checked first, then a full board is a draw;
    /// otherwise the turn passes. Rejected moves leave the game untouched.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<GameOutcome, MoveError> {
        self.apply(Move::new(self.to_move, coord))
    }

    /// Like [`Game::apply_move`], recording the search score in history.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_scored_move(&mut self, coord: Coord, score: i32) -> Result<GameOutcome, MoveError> {
        self.apply(Move::new(self.to_move, coord).with_score(score))
    }

    fn apply(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(mv.coord) {
            return Err(MoveError::OutOfBounds(mv.coord));
        }
        if !self.board.is_empty(mv.coord) {
            return Err(MoveError::Occupied(mv.coord));
        }

        self.board.set(mv.coord, Cell::Occupied(mv.player));
        self.history.push(mv);

        if rules::has_win(&self.board, mv.player) {
            self.outcome = GameOutcome::Win(mv.player);
            info!(winner = ?mv.player, "Game won");
        } else if rules::is_full(&self.board) {
            self.outcome = GameOutcome::Draw;
            info!("Game drawn");
        } else {
            self.to_move = mv.player.opponent();
        }

        Ok(self.outcome)
    }
}
