//! Human player reading moves from a line-based input.

use super::Player;
use crate::board::{Board, Letter};
use crate::error::GameError;
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// Asks for a cell index until it gets one that is empty.
///
/// Garbage and taken cells are answered with a retry message; only a closed
/// input or an I/O failure is reported as an error.
pub struct HumanPlayer<R: BufRead, W: Write> {
    letter: Letter,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Reads from stdin and prompts on stdout.
    pub fn stdio(letter: Letter) -> Self {
        Self::new(letter, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(letter: Letter, input: R, output: W) -> Self {
        Self {
            letter,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn letter(&self) -> Letter {
        self.letter
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, GameError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(GameError::NoAvailableMoves);
        }

        loop {
            write!(self.output, "{}'s turn. Input move (0-8): ", self.letter)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(square) if moves.contains(&square) => return Ok(square),
                _ => {
                    debug!(letter = %self.letter, input = line.trim(), "rejected move");
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
        }
    }
}
