//! Line-oriented console prompts.
//!
//! All reads and writes go through [`Console`], which is generic over the
//! input and output streams so whole sessions can be scripted in tests.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use tictactoe_core::{Board, Coord};
use tracing::{debug, instrument};

/// Console failure: the input ended or a stream broke.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Prompting console over arbitrary streams.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a prompt and reads one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::new("input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses and lies in `range`.
    #[instrument(skip(self, range))]
    pub fn ask_in_range<T>(&mut self, prompt: &str, range: RangeInclusive<T>) -> Result<T, ConsoleError>
    where
        T: FromStr + PartialOrd + std::fmt::Display,
    {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => {
                    debug!(answer = %answer, "Rejected menu input");
                    self.say(format!(
                        "Invalid choice! Please enter a value between {} and {}.",
                        range.start(),
                        range.end()
                    ))?;
                }
            }
        }
    }

    /// Asks a yes/no question; anything but `y`/`Y` counts as no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }

    /// Asks for a row and a column until they name an empty cell.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn ask_coord(&mut self, board: &Board) -> Result<Coord, ConsoleError> {
        let max = board.size() - 1;
        loop {
            let row = self.ask(&format!("Enter row (0-{}): ", max))?;
            let col = self.ask(&format!("Enter column (0-{}): ", max))?;

            let coord = match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) if row <= max && col <= max => Coord::new(row, col),
                _ => {
                    self.say(format!(
                        "Invalid input! Row and column must be between 0 and {}.",
                        max
                    ))?;
                    continue;
                }
            };

            if board.is_empty(coord) {
                return Ok(coord);
            }
            self.say("Cell already occupied! Choose another cell.")?;
        }
    }
}
