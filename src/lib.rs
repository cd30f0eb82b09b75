//! Tic-Tac-Toe with pluggable players and an exhaustive game-tree search.
//!
//! The interesting part is [`search::GameTreeSearch`], which walks the whole
//! game tree from a position with plain minimax or with alpha-beta pruning.
//! Both variants pick the same move; pruning only skips work. The
//! [`players::GeniusPlayer`] wraps it behind the [`players::Player`] trait next
//! to a random and a human player, and [`game::play`] runs the turn loop.
//!
//! # Example
//!
//! ```rust
//! use ttt_genius::board::{Board, Letter};
//! use ttt_genius::search::GameTreeSearch;
//!
//! // X to move, X can complete the top row
//! let mut board: Board = "XX OO    ".parse().unwrap();
//!
//! let search = GameTreeSearch::builder(Letter::X)
//!     .with_alpha_beta_pruning(true)
//!     .build();
//! let result = search.search(&mut board);
//!
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.score, 1);
//! ```

/// The 3x3 board, the letters, and move application with win detection.
pub mod board;
/// Timing comparison between plain minimax and alpha-beta.
pub mod compare;
/// Game configuration loaded from TOML.
pub mod config;
/// Error types.
pub mod error;
/// The turn loop.
pub mod game;
/// The `Player` trait and the random, human and search-based players.
pub mod players;
/// Output side of the turn loop.
pub mod presenter;
/// Traits and implementations for random number generation.
pub mod random;
/// Minimax and alpha-beta search.
pub mod search;
