extern crate ttt_genius;

use ttt_genius::board::{Board, Letter};
use ttt_genius::game::{Outcome, play};
use ttt_genius::players::GeniusPlayer;
use ttt_genius::presenter::ConsolePresenter;
use std::time::Duration;

fn main() {
    // Two perfect players, X opening on a random square
    let mut x_player = GeniusPlayer::new(Letter::X, true);
    let mut o_player = GeniusPlayer::new(Letter::O, false);
    let mut presenter = ConsolePresenter::stdout(Duration::ZERO);
    let mut board = Board::new();

    // Play it out, printing every move
    let outcome = play(&mut board, &mut x_player, &mut o_player, &mut presenter)
        .expect("stdout is writable");

    // Perfect play on both sides always ends in a tie
    assert_eq!(outcome, Outcome::Draw);
    println!(
        "Positions searched: X (alpha-beta) = {}, O (minimax) = {}",
        x_player.nodes_visited(),
        o_player.nodes_visited()
    );
}
