//! Error types shared by the players, the turn loop and board parsing.

use derive_more::{Display, Error};

/// Failures that can cross a player or turn-loop boundary.
///
/// Invalid human input never shows up here: it is handled by re-prompting.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// A move was requested on a board with no empty squares.
    #[display("no empty squares left to play")]
    NoAvailableMoves,
    /// The input source ended before a valid move was entered.
    #[display("input closed before a valid move was entered")]
    InputClosed,
    /// Reading input or writing output failed.
    #[display("i/o error: {_0}")]
    Io(#[error(source)] std::io::Error),
    /// A textual board could not be parsed.
    #[display("invalid board {board:?}: {reason}")]
    InvalidBoard {
        /// The rejected input.
        board: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl GameError {
    pub(crate) fn invalid_board(board: &str, reason: &'static str) -> Self {
        Self::InvalidBoard {
            board: board.to_string(),
            reason,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Failures while loading a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[display("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for a game config.
    #[display("failed to parse config: {_0}")]
    Parse(#[error(source)] toml::de::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}
