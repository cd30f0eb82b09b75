use super::Player;
use crate::board::{Board, Letter};
use crate::error::GameError;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use tracing::debug;

/// Plays a uniformly random empty cell.
#[derive(Debug)]
pub struct RandomPlayer<K: RandomGenerator = StandardRandomGenerator> {
    letter: Letter,
    random: K,
}

impl RandomPlayer {
    pub fn new(letter: Letter) -> Self {
        Self::with_random_generator(letter, StandardRandomGenerator)
    }
}

impl<K: RandomGenerator> RandomPlayer<K> {
    pub fn with_random_generator(letter: Letter, random: K) -> Self {
        Self { letter, random }
    }
}

impl<K: RandomGenerator> Player for RandomPlayer<K> {
    fn letter(&self) -> Letter {
        self.letter
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, GameError> {
        let moves = board.available_moves();
        let square = *self
            .random
            .choose(&moves)
            .ok_or(GameError::NoAvailableMoves)?;
        debug!(letter = %self.letter, square, "random move");
        Ok(square)
    }
}
