use crate::board::{Board, Letter};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

const NEG_INFINITY: i32 = i32::MIN;
const POS_INFINITY: i32 = i32::MAX;

/// How a finished game is turned into a search score.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreConvention {
    /// +1 when the searching letter won, -1 when the other letter won.
    #[default]
    Searcher,
    /// -1 when X won, +1 when O won, whoever is searching.
    ///
    /// Identical to `Searcher` for an O searcher. An X searcher using it
    /// plays for O's benefit.
    FixedLetter,
}

impl ScoreConvention {
    pub fn terminal_score(self, winner: Letter, maximizing: Letter) -> i32 {
        match self {
            ScoreConvention::Searcher => {
                if winner == maximizing {
                    1
                } else {
                    -1
                }
            }
            ScoreConvention::FixedLetter => match winner {
                Letter::X => -1,
                Letter::O => 1,
            },
        }
    }
}

/// Outcome of one search.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SearchResult {
    /// Always one of -1, 0, 1.
    pub score: i32,
    /// `None` when the board was already decided.
    pub best_move: Option<usize>,
    /// Number of positions the search entered, the root included.
    pub nodes_visited: u64,
}

/// Exhaustive game-tree search over a [`Board`], from the point of view of one letter.
///
/// Moves are tried in ascending cell order and only a strictly better score
/// replaces the current best, so the first of several equally good moves wins.
#[derive(Debug, Clone)]
pub struct GameTreeSearch {
    maximizing: Letter,
    use_alpha_beta_pruning: bool,
    convention: ScoreConvention,
}

/// A builder for creating instances of `GameTreeSearch`.
pub struct GameTreeSearchBuilder {
    maximizing: Letter,
    use_alpha_beta_pruning: bool,
    convention: ScoreConvention,
}

impl GameTreeSearchBuilder {
    /// Creates a new builder searching on behalf of `letter`.
    pub fn new(letter: Letter) -> Self {
        Self {
            maximizing: letter,
            use_alpha_beta_pruning: true,
            convention: ScoreConvention::default(),
        }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    pub fn with_score_convention(mut self, convention: ScoreConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn build(self) -> GameTreeSearch {
        GameTreeSearch {
            maximizing: self.maximizing,
            use_alpha_beta_pruning: self.use_alpha_beta_pruning,
            convention: self.convention,
        }
    }
}

impl GameTreeSearch {
    pub fn builder(letter: Letter) -> GameTreeSearchBuilder {
        GameTreeSearchBuilder::new(letter)
    }

    pub fn letter(&self) -> Letter {
        self.maximizing
    }

    pub fn uses_alpha_beta_pruning(&self) -> bool {
        self.use_alpha_beta_pruning
    }

    /// Finds the best move for the searching letter, which must be the one to move.
    ///
    /// The board is mutated while the tree is walked and is back to its
    /// original state when this returns.
    #[instrument(
        skip(self, board),
        fields(letter = %self.maximizing, alpha_beta = self.use_alpha_beta_pruning)
    )]
    pub fn search(&self, board: &mut Board) -> SearchResult {
        let result = if self.use_alpha_beta_pruning {
            self.minimax_alpha_beta(board, self.maximizing)
        } else {
            self.minimax(board, self.maximizing)
        };
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = result.nodes_visited,
            "search finished"
        );
        result
    }

    /// Plain minimax with `player_to_move` at the root.
    pub fn minimax(&self, board: &mut Board, player_to_move: Letter) -> SearchResult {
        let mut nodes_visited = 0;
        let (score, best_move) = self.minimax_node(board, player_to_move, &mut nodes_visited);
        SearchResult {
            score,
            best_move,
            nodes_visited,
        }
    }

    /// Minimax with alpha-beta pruning. Same answer as [`GameTreeSearch::minimax`], fewer nodes.
    pub fn minimax_alpha_beta(&self, board: &mut Board, player_to_move: Letter) -> SearchResult {
        let mut nodes_visited = 0;
        let (score, best_move) = self.alpha_beta_node(
            board,
            player_to_move,
            NEG_INFINITY,
            POS_INFINITY,
            &mut nodes_visited,
        );
        SearchResult {
            score,
            best_move,
            nodes_visited,
        }
    }

    fn minimax_node(
        &self,
        board: &mut Board,
        player: Letter,
        nodes_visited: &mut u64,
    ) -> (i32, Option<usize>) {
        *nodes_visited += 1;
        if let Some(score) = self.terminal_score(board, player) {
            return (score, None);
        }

        let is_maximizing = player == self.maximizing;
        let mut best = if is_maximizing {
            (NEG_INFINITY, None)
        } else {
            (POS_INFINITY, None)
        };

        for possible_move in board.available_moves() {
            let score = {
                let mut simulated = SimulatedMove::apply(board, possible_move, player);
                self.minimax_node(&mut simulated, player.opponent(), nodes_visited)
                    .0
            };

            if is_maximizing && score > best.0 || !is_maximizing && score < best.0 {
                best = (score, Some(possible_move));
            }
        }

        best
    }

    fn alpha_beta_node(
        &self,
        board: &mut Board,
        player: Letter,
        mut alpha: i32,
        mut beta: i32,
        nodes_visited: &mut u64,
    ) -> (i32, Option<usize>) {
        *nodes_visited += 1;
        if let Some(score) = self.terminal_score(board, player) {
            return (score, None);
        }

        let is_maximizing = player == self.maximizing;
        let mut best = if is_maximizing {
            (NEG_INFINITY, None)
        } else {
            (POS_INFINITY, None)
        };

        for possible_move in board.available_moves() {
            let score = {
                let mut simulated = SimulatedMove::apply(board, possible_move, player);
                self.alpha_beta_node(
                    &mut simulated,
                    player.opponent(),
                    alpha,
                    beta,
                    nodes_visited,
                )
                .0
            };

            if is_maximizing {
                if score > best.0 {
                    best = (score, Some(possible_move));
                }
                alpha = alpha.max(score);
            } else {
                if score < best.0 {
                    best = (score, Some(possible_move));
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Score of a decided board, seen from the letter that just moved.
    fn terminal_score(&self, board: &Board, player: Letter) -> Option<i32> {
        let last_mover = player.opponent();
        if board.winner() == Some(last_mover) {
            return Some(self.convention.terminal_score(last_mover, self.maximizing));
        }
        if !board.has_empty_squares() {
            return Some(0);
        }
        None
    }
}

/// A move played on a borrowed board for the duration of a scope.
///
/// Dropping it retracts the move, so the board is restored on every exit
/// path, pruning included.
struct SimulatedMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> SimulatedMove<'a> {
    fn apply(board: &'a mut Board, index: usize, letter: Letter) -> Self {
        let applied = board.apply_move(index, letter);
        debug_assert!(applied, "simulated a move into taken cell {index}");
        Self { board, index }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.retract_move(self.index);
    }
}
