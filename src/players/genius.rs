use super::Player;
use crate::board::{Board, Letter};
use crate::error::GameError;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::search::{GameTreeSearch, ScoreConvention};
use tracing::debug;

/// Computer player that plays perfectly by searching the whole game tree.
///
/// The opening move on an empty board is random instead: every opening
/// leads to a draw under perfect play and searching it is the most
/// expensive call by far.
#[derive(Debug)]
pub struct GeniusPlayer<K: RandomGenerator = StandardRandomGenerator> {
    search: GameTreeSearch,
    random: K,
    nodes_visited: u64,
}

impl GeniusPlayer {
    pub fn new(letter: Letter, use_alpha_beta: bool) -> Self {
        Self::with_random_generator(letter, use_alpha_beta, StandardRandomGenerator)
    }
}

impl<K: RandomGenerator> GeniusPlayer<K> {
    pub fn with_random_generator(letter: Letter, use_alpha_beta: bool, random: K) -> Self {
        Self {
            search: GameTreeSearch::builder(letter)
                .with_alpha_beta_pruning(use_alpha_beta)
                .build(),
            random,
            nodes_visited: 0,
        }
    }

    /// Replaces the search, keeping the letter and pruning setting, with one scoring by `convention`.
    pub fn with_score_convention(mut self, convention: ScoreConvention) -> Self {
        self.search = GameTreeSearch::builder(self.search.letter())
            .with_alpha_beta_pruning(self.search.uses_alpha_beta_pruning())
            .with_score_convention(convention)
            .build();
        self
    }

    pub fn uses_alpha_beta(&self) -> bool {
        self.search.uses_alpha_beta_pruning()
    }

    /// Total positions searched over every move this player has made.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }
}

impl<K: RandomGenerator> Player for GeniusPlayer<K> {
    fn letter(&self) -> Letter {
        self.search.letter()
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, GameError> {
        if board.is_empty_board() {
            let moves = board.available_moves();
            let square = *self
                .random
                .choose(&moves)
                .ok_or(GameError::NoAvailableMoves)?;
            debug!(letter = %self.letter(), square, "random opening move");
            return Ok(square);
        }

        let mut scratch = *board;
        let result = self.search.search(&mut scratch);
        self.nodes_visited += result.nodes_visited;
        result.best_move.ok_or(GameError::NoAvailableMoves)
    }
}
