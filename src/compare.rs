//! Side-by-side timing of plain minimax and alpha-beta.

use crate::board::{Board, Letter};
use crate::error::GameError;
use crate::game::{play, Outcome};
use crate::players::{GeniusPlayer, RandomPlayer};
use crate::presenter::SilentPresenter;
use crate::random::AnyGenerator;
use crate::search::ScoreConvention;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// One silent genius-X vs random-O game.
#[derive(Debug, Clone, Copy)]
pub struct VariantRun {
    pub use_alpha_beta: bool,
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub nodes_visited: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct PerformanceReport {
    pub minimax: VariantRun,
    pub alpha_beta: VariantRun,
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Minimax Execution Time: {:.4} seconds ({} nodes)",
            self.minimax.elapsed.as_secs_f64(),
            self.minimax.nodes_visited
        )?;
        write!(
            f,
            "Alpha-Beta Execution Time: {:.4} seconds ({} nodes)",
            self.alpha_beta.elapsed.as_secs_f64(),
            self.alpha_beta.nodes_visited
        )
    }
}

/// Plays the same matchup once per search variant.
///
/// With a seed both games see the same random choices, so they are move
/// for move identical and only the search cost differs.
#[instrument]
pub fn compare_performance(
    seed: Option<i64>,
    convention: ScoreConvention,
) -> Result<PerformanceReport, GameError> {
    let minimax = run_variant(false, seed, convention)?;
    let alpha_beta = run_variant(true, seed, convention)?;
    info!(
        minimax_nodes = minimax.nodes_visited,
        alpha_beta_nodes = alpha_beta.nodes_visited,
        "comparison finished"
    );
    Ok(PerformanceReport {
        minimax,
        alpha_beta,
    })
}

fn run_variant(
    use_alpha_beta: bool,
    seed: Option<i64>,
    convention: ScoreConvention,
) -> Result<VariantRun, GameError> {
    let mut x_player =
        GeniusPlayer::with_random_generator(Letter::X, use_alpha_beta, AnyGenerator::from_seed(seed))
            .with_score_convention(convention);
    let mut o_player = RandomPlayer::with_random_generator(
        Letter::O,
        AnyGenerator::from_seed(seed.map(|s| s.wrapping_add(1))),
    );
    let mut board = Board::new();

    let started = Instant::now();
    let outcome = play(&mut board, &mut x_player, &mut o_player, &mut SilentPresenter)?;
    let elapsed = started.elapsed();

    Ok(VariantRun {
        use_alpha_beta,
        outcome,
        elapsed,
        nodes_visited: x_player.nodes_visited(),
    })
}

#[cfg(test)]
mod tests {
    use crate::board::Letter;
    use crate::compare::compare_performance;
    use crate::game::Outcome;
    use crate::search::ScoreConvention;

    #[test]
    fn seeded_runs_play_the_same_game() {
        let report = compare_performance(Some(42), ScoreConvention::Searcher).unwrap();

        assert!(!report.minimax.use_alpha_beta);
        assert!(report.alpha_beta.use_alpha_beta);
        assert_eq!(report.minimax.outcome, report.alpha_beta.outcome);
        assert_ne!(report.minimax.outcome, Outcome::Win(Letter::O));
        assert!(report.alpha_beta.nodes_visited < report.minimax.nodes_visited);

        let text = report.to_string();
        assert!(text.starts_with("Minimax Execution Time: "));
        assert!(text.contains("\nAlpha-Beta Execution Time: "));
    }
}
