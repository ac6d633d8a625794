//! Core domain types for N x N tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported board size.
pub const MIN_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_SIZE: usize = 15;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character used to draw this mark.
    pub fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Character representation; empty cells are a blank.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.as_char(),
        }
    }

    /// Parses a cell from its character representation.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// A zero-based (row, column) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Error building or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Requested size is outside the supported range.
    #[display("Board size {_0} is out of range (3-15)")]
    SizeOutOfRange(usize),

    /// Wrong number of rows supplied.
    #[display("Expected {expected} rows, found {found}")]
    RowCount {
        /// Rows required by the board size.
        expected: usize,
        /// Rows actually supplied.
        found: usize,
    },

    /// A row has more cells than the board is wide.
    #[display("Row {row} has {found} cells, expected at most {expected}")]
    RowTooLong {
        /// Offending row.
        row: usize,
        /// Board width.
        expected: usize,
        /// Cells found.
        found: usize,
    },

    /// A row contains a character that is not a mark or a blank.
    #[display("Invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// Row of the bad character.
        row: usize,
        /// Column of the bad character.
        col: usize,
        /// The character itself.
        ch: char,
    },
}

impl std::error::Error for BoardError {}

/// Outcome of a game, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// True for wins and draws.
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

/// Square N x N board stored as a single row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::SizeOutOfRange(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Builds a board from textual rows (blank = empty, `X`/`O` = marks).
    ///
    /// Rows shorter than the board is wide are padded with empty cells.
    #[instrument(skip(rows))]
    pub fn from_rows<S: AsRef<str>>(size: usize, rows: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        if rows.len() != size {
            return Err(BoardError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.as_ref().chars().collect();
            if chars.len() > size {
                return Err(BoardError::RowTooLong {
                    row,
                    expected: size,
                    found: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = Cell::from_char(ch).ok_or(BoardError::InvalidCell { row, col, ch })?;
                board.cells[row * size + col] = cell;
            }
        }

        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether a coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Sets the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Checks if a cell is empty. Off-board coordinates are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.contains(coord) && self.get(coord) == Cell::Empty
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Center cell, which only exists on odd-sized boards.
    pub fn center(&self) -> Option<Coord> {
        (self.size % 2 == 1).then(|| Coord::new(self.size / 2, self.size / 2))
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Coord; 4] {
        let last = self.size - 1;
        [
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ]
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Rows rendered as raw characters, one string per row.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size).map(move |row| self.row(row).iter().map(|cell| cell.as_char()).collect())
    }

    /// Places `player` at `coord`, runs `f` on the board, then empties
    /// the cell again before returning `f`'s result.
    ///
    /// The cell must be empty on entry.
    pub fn with_placed<R>(&mut self, coord: Coord, player: Player, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_empty(coord), "hypothetical placement on occupied cell");
        self.set(coord, Cell::Occupied(player));
        let result = f(self);
        self.set(coord, Cell::Empty);
        result
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(self.contains(coord), "coordinate {coord} off a {0}x{0} board", self.size);
        coord.row * self.size + coord.col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = format!("   {}+", "+---".repeat(self.size));

        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {col:<3}")?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;

        for row in 0..self.size {
            write!(f, "{row:>2} ")?;
            for cell in self.row(row) {
                write!(f, "| {} ", cell.as_char())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
