//! Everything the turn loop shows to a person, kept out of the game logic.

use crate::board::{Board, Letter};
use crate::game::Outcome;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

/// Receives the turn loop's progress.
pub trait Presenter {
    fn show_board(&mut self, board: &Board) -> io::Result<()>;
    fn announce_move(&mut self, letter: Letter, square: usize, board: &Board) -> io::Result<()>;
    fn announce_outcome(&mut self, outcome: Outcome) -> io::Result<()>;
    /// Called once per loop iteration, after the move was handled.
    fn pause(&mut self);
}

/// Writes the game as text and waits a fixed delay between turns.
pub struct ConsolePresenter<W: Write> {
    output: W,
    delay: Duration,
}

impl ConsolePresenter<Stdout> {
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(output: W, delay: Duration) -> Self {
        Self { output, delay }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{}", board)
    }

    fn announce_move(&mut self, letter: Letter, square: usize, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{} makes a move to square {}", letter, square)?;
        writeln!(self.output, "{}", board)?;
        writeln!(self.output)
    }

    fn announce_outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Win(letter) => writeln!(self.output, "{} wins!", letter),
            Outcome::Draw => writeln!(self.output, "It's a tie!"),
        }
    }

    fn pause(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Shows nothing and never waits. Used for timing runs.
#[derive(Debug, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn show_board(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    fn announce_move(&mut self, _letter: Letter, _square: usize, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    fn announce_outcome(&mut self, _outcome: Outcome) -> io::Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}
}
