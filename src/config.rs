//! Game configuration loaded from TOML.

use crate::board::Letter;
use crate::error::ConfigError;
use crate::players::{GeniusPlayer, HumanPlayer, Player, RandomPlayer};
use crate::random::AnyGenerator;
use crate::search::ScoreConvention;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Which strategy fills a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Reads moves from the terminal.
    Human,
    /// Picks a random empty square.
    Random,
    /// Searches the full game tree.
    Genius,
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who plays X.
    #[serde(default = "default_x_player")]
    pub x_player: PlayerKind,

    /// Who plays O.
    #[serde(default = "default_o_player")]
    pub o_player: PlayerKind,

    /// Genius players prune with alpha-beta when set, otherwise run plain minimax.
    #[serde(default = "default_use_alpha_beta")]
    pub use_alpha_beta: bool,

    #[serde(default)]
    pub score_convention: ScoreConvention,

    /// Pause between turns, in milliseconds.
    #[serde(default = "default_turn_delay_ms")]
    pub turn_delay_ms: u64,

    /// Makes every random choice reproducible. O's generator uses `seed + 1`.
    #[serde(default)]
    pub seed: Option<i64>,
}

fn default_x_player() -> PlayerKind {
    PlayerKind::Human
}

fn default_o_player() -> PlayerKind {
    PlayerKind::Genius
}

fn default_use_alpha_beta() -> bool {
    true
}

fn default_turn_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x_player: default_x_player(),
            o_player: default_o_player(),
            use_alpha_beta: default_use_alpha_beta(),
            score_convention: ScoreConvention::default(),
            turn_delay_ms: default_turn_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    fn seed_for(&self, letter: Letter) -> Option<i64> {
        match letter {
            Letter::X => self.seed,
            Letter::O => self.seed.map(|s| s.wrapping_add(1)),
        }
    }

    /// Builds the player for `letter` as configured. Humans use stdin/stdout.
    pub fn build_player(&self, letter: Letter) -> Box<dyn Player> {
        let kind = match letter {
            Letter::X => self.x_player,
            Letter::O => self.o_player,
        };
        let random = AnyGenerator::from_seed(self.seed_for(letter));

        match kind {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(letter)),
            PlayerKind::Random => Box::new(RandomPlayer::with_random_generator(letter, random)),
            PlayerKind::Genius => Box::new(
                GeniusPlayer::with_random_generator(letter, self.use_alpha_beta, random)
                    .with_score_convention(self.score_convention),
            ),
        }
    }
}
