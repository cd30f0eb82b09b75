//! The `Player` capability and its three implementations.

mod genius;
mod human;
mod random;

pub use genius::GeniusPlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::board::{Board, Letter};
use crate::error::GameError;

/// Something that can pick the next move for one letter.
pub trait Player {
    /// The letter this player places.
    fn letter(&self) -> Letter;

    /// Returns an empty cell index (0-8) to play on `board`.
    ///
    /// The board is left as it was; the caller applies the move.
    fn get_move(&mut self, board: &Board) -> Result<usize, GameError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn letter(&self) -> Letter {
        (**self).letter()
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, GameError> {
        (**self).get_move(board)
    }
}
