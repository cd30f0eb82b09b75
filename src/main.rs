//! ttt-genius binary: play a game or compare the search variants.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_genius::board::{Board, Letter};
use ttt_genius::compare::compare_performance;
use ttt_genius::config::GameConfig;
use ttt_genius::game::play;
use ttt_genius::presenter::ConsolePresenter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            minimax,
            delay_ms,
            seed,
        } => {
            let mut game_config = load_config(config.as_deref())?;
            if let Some(x) = x {
                game_config.x_player = x;
            }
            if let Some(o) = o {
                game_config.o_player = o;
            }
            if minimax {
                game_config.use_alpha_beta = false;
            }
            if let Some(delay_ms) = delay_ms {
                game_config.turn_delay_ms = delay_ms;
            }
            if seed.is_some() {
                game_config.seed = seed;
            }
            run_game(&game_config)
        }
        Command::Compare { config, seed } => {
            let game_config = load_config(config.as_deref())?;
            let report = compare_performance(seed.or(game_config.seed), game_config.score_convention)
                .context("comparison game failed")?;
            println!("{}", report);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Plays one game on the terminal
fn run_game(config: &GameConfig) -> Result<()> {
    info!(?config, "starting game");

    let mut x_player = config.build_player(Letter::X);
    let mut o_player = config.build_player(Letter::O);
    let mut presenter = ConsolePresenter::stdout(config.turn_delay());
    let mut board = Board::new();

    let outcome = play(&mut board, &mut x_player, &mut o_player, &mut presenter)
        .context("game aborted")?;
    info!(?outcome, "game over");

    Ok(())
}
