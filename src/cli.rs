//! Command-line interface for ttt-genius.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_genius::config::PlayerKind;

/// Tic-Tac-Toe against a perfect minimax player
#[derive(Parser, Debug)]
#[command(name = "ttt-genius")]
#[command(about = "Tic-Tac-Toe with random, human and minimax players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who plays X
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Who plays O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Search with plain minimax instead of alpha-beta
        #[arg(long)]
        minimax: bool,

        /// Pause between turns, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reproducible random moves
        #[arg(long)]
        seed: Option<i64>,
    },

    /// Time a genius-vs-random game with minimax and with alpha-beta
    Compare {
        /// Path to a TOML game config (only the seed and score convention are used)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible random moves
        #[arg(long)]
        seed: Option<i64>,
    },
}
