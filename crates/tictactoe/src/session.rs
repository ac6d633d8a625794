//! A single game between two participants.

use crate::console::Console;
use crate::stats::Statistics;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactoe_core::{Difficulty, Game, GameOutcome, Move, Player, choose_move};
use tracing::{debug, info, instrument, warn};

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Two humans sharing the console.
    #[value(name = "pvp")]
    PlayerVsPlayer,
    /// A human against the computer.
    #[default]
    #[value(name = "pva")]
    PlayerVsAi,
}

impl Mode {
    /// Maps a menu choice (1-2) to a mode.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Mode::PlayerVsPlayer),
            2 => Some(Mode::PlayerVsAi),
            _ => None,
        }
    }
}

/// Something that can pick moves.
pub trait Participant<R, W> {
    /// Display name.
    fn name(&self) -> &str;

    /// Chooses the next move for `game.to_move()`.
    fn next_move(&mut self, game: &Game, console: &mut Console<R, W>) -> Result<Move>;
}

/// A human entering coordinates at the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: BufRead, W: Write> Participant<R, W> for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, game: &Game, console: &mut Console<R, W>) -> Result<Move> {
        let player = game.to_move();
        console.say(format!("\n{}'s turn:", self.name))?;
        let coord = console.ask_coord(game.board())?;
        Ok(Move::new(player, coord))
    }
}

/// The computer, playing at a fixed difficulty.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl AiPlayer {
    /// Creates an AI whose random choices are drawn from `seed`.
    pub fn new(mark: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: format!("AI ({})", mark),
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: BufRead, W: Write> Participant<R, W> for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip_all, fields(ai = %self.name, difficulty = %self.difficulty))]
    fn next_move(&mut self, game: &Game, console: &mut Console<R, W>) -> Result<Move> {
        let mark = game.to_move();
        let thinking = if self.difficulty == Difficulty::Hard {
            " (Minimax evaluation)"
        } else {
            ""
        };
        console.say(format!("\n{} is thinking{}...", self.name, thinking))?;

        let decision = choose_move(game.board(), self.difficulty, mark, mark.opponent(), &mut self.rng)?;
        let coord = decision.coord;

        let mut line = format!(
            "AI ({}) plays at row {}, column {}",
            self.difficulty, coord.row, coord.col
        );
        if let Some(score) = decision.score {
            line.push_str(&format!(" (Minimax score: {})", score));
        }
        if let Some(tactic) = decision.tactic {
            line.push_str(&format!(" ({})", tactic));
        }
        console.say(line)?;

        let mv = Move::new(mark, coord);
        Ok(match decision.score {
            Some(score) => mv.with_score(score),
            None => mv,
        })
    }
}

/// Boxed participant over the console's stream types.
pub type BoxedParticipant<R, W> = Box<dyn Participant<R, W>>;

/// Builds the X and O participants for a mode.
///
/// In player-vs-AI mode the computer takes `ai_mark` and the human the
/// other mark.
pub fn participants<R: BufRead, W: Write>(
    mode: Mode,
    difficulty: Difficulty,
    ai_mark: Player,
    seed: u64,
) -> (BoxedParticipant<R, W>, BoxedParticipant<R, W>) {
    let human = |mark: Player| -> BoxedParticipant<R, W> { Box::new(HumanPlayer::new(format!("Player {}", mark))) };
    match mode {
        Mode::PlayerVsPlayer => (human(Player::X), human(Player::O)),
        Mode::PlayerVsAi => {
            let ai: BoxedParticipant<R, W> = Box::new(AiPlayer::new(ai_mark, difficulty, seed));
            match ai_mark {
                Player::X => (ai, human(Player::O)),
                Player::O => (human(Player::X), ai),
            }
        }
    }
}

/// A game plus the two sides playing it.
pub struct GameSession<R, W> {
    game: Game,
    x: BoxedParticipant<R, W>,
    o: BoxedParticipant<R, W>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session over a new or resumed game.
    pub fn new(game: Game, x: BoxedParticipant<R, W>, o: BoxedParticipant<R, W>) -> Self {
        Self { game, x, o }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the game.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Plays until the game ends, then records the result in `stats`.
    #[instrument(skip_all, fields(size = self.game.board().size()))]
    pub fn play(&mut self, console: &mut Console<R, W>, stats: &mut Statistics) -> Result<GameOutcome> {
        info!(x = self.x.name(), o = self.o.name(), "Game started");

        while !self.game.outcome().is_over() {
            console.say(self.game.board())?;

            let side = match self.game.to_move() {
                Player::X => &mut self.x,
                Player::O => &mut self.o,
            };
            let mv = side.next_move(&self.game, console)?;
            debug!(%mv, "Move chosen");

            let applied = match mv.score {
                Some(score) => self.game.apply_scored_move(mv.coord, score),
                None => self.game.apply_move(mv.coord),
            };
            if let Err(e) = applied {
                warn!(error = %e, "Move rejected");
                console.say(e)?;
            }
        }

        console.say(self.game.board())?;
        let outcome = self.game.outcome();
        match outcome {
            GameOutcome::Win(winner) => console.say(format!("\n*** Player {} wins! ***\n", winner))?,
            GameOutcome::Draw => console.say("\n*** It's a draw! ***\n")?,
            GameOutcome::Ongoing => {}
        }

        stats.record(outcome, self.game.winning_line());
        info!(?outcome, moves = self.game.history().len(), "Game finished");
        Ok(outcome)
    }
}
