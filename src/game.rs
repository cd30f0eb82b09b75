use crate::board::{Board, Letter};
use crate::error::GameError;
use crate::players::Player;
use crate::presenter::Presenter;
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    Win(Letter),
    Draw,
}

/// Runs the turn loop until someone completes a line or the board fills up.
///
/// X moves first. A move into a taken cell is refused and the same player
/// is asked again; the turn only passes after an accepted move.
#[instrument(skip_all)]
pub fn play<X, O, P>(
    board: &mut Board,
    x_player: &mut X,
    o_player: &mut O,
    presenter: &mut P,
) -> Result<Outcome, GameError>
where
    X: Player + ?Sized,
    O: Player + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.show_board(board)?;
    if let Some(winner) = board.winner() {
        return Ok(Outcome::Win(winner));
    }

    let mut letter = Letter::X;
    while board.has_empty_squares() {
        let square = match letter {
            Letter::X => x_player.get_move(board)?,
            Letter::O => o_player.get_move(board)?,
        };

        if board.apply_move(square, letter) {
            debug!(%letter, square, "move applied");
            presenter.announce_move(letter, square, board)?;

            if let Some(winner) = board.winner() {
                info!(%winner, "game won");
                presenter.announce_outcome(Outcome::Win(winner))?;
                return Ok(Outcome::Win(winner));
            }

            letter = letter.opponent();
        } else {
            warn!(%letter, square, "move refused, square is taken");
        }

        presenter.pause();
    }

    info!("game drawn");
    presenter.announce_outcome(Outcome::Draw)?;
    Ok(Outcome::Draw)
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Letter};
    use crate::error::GameError;
    use crate::game::{play, Outcome};
    use crate::players::{GeniusPlayer, Player, RandomPlayer};
    use crate::presenter::{ConsolePresenter, SilentPresenter};
    use crate::random::SeededGenerator;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Plays a fixed list of squares, whether or not they are free.
    struct ScriptedPlayer {
        letter: Letter,
        squares: VecDeque<usize>,
        calls: usize,
    }

    impl ScriptedPlayer {
        fn new(letter: Letter, squares: &[usize]) -> Self {
            Self {
                letter,
                squares: squares.iter().copied().collect(),
                calls: 0,
            }
        }
    }

    impl Player for ScriptedPlayer {
        fn letter(&self) -> Letter {
            self.letter
        }

        fn get_move(&mut self, _board: &Board) -> Result<usize, GameError> {
            self.calls += 1;
            self.squares.pop_front().ok_or(GameError::InputClosed)
        }
    }

    #[test]
    fn genius_self_play_always_draws() {
        for seed in 0..9 {
            for use_alpha_beta in [false, true] {
                // arrange
                let mut board = Board::new();
                let mut x = GeniusPlayer::with_random_generator(
                    Letter::X,
                    use_alpha_beta,
                    SeededGenerator::new(seed),
                );
                let mut o = GeniusPlayer::new(Letter::O, use_alpha_beta);

                // act
                let outcome = play(&mut board, &mut x, &mut o, &mut SilentPresenter).unwrap();

                // assert
                assert_eq!(outcome, Outcome::Draw, "seed {seed}");
                assert_eq!(board.winner(), None);
                assert!(!board.has_empty_squares());
            }
        }
    }

    #[test]
    fn center_opening_with_optimal_replies_draws() {
        let mut board: Board = "    X    ".parse().unwrap();
        let mut x = GeniusPlayer::new(Letter::X, false);
        let mut o = GeniusPlayer::new(Letter::O, false);

        // play() always starts with X, so drive the O-first game by hand
        let mut letter = Letter::O;
        while board.has_empty_squares() && board.winner().is_none() {
            let square = match letter {
                Letter::X => x.get_move(&board).unwrap(),
                Letter::O => o.get_move(&board).unwrap(),
            };
            assert!(board.apply_move(square, letter));
            letter = letter.opponent();
        }

        assert_eq!(board.winner(), None);
        assert!(!board.has_empty_squares());
    }

    #[test]
    fn genius_never_loses_to_random() {
        for seed in 0..20 {
            let mut board = Board::new();
            let mut x = RandomPlayer::with_random_generator(Letter::X, SeededGenerator::new(seed));
            let mut o = GeniusPlayer::new(Letter::O, true);

            let outcome = play(&mut board, &mut x, &mut o, &mut SilentPresenter).unwrap();

            assert_ne!(outcome, Outcome::Win(Letter::X), "seed {seed}");
        }
    }

    #[test]
    fn refused_move_does_not_pass_the_turn() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Letter::X, &[0, 1, 2]);
        let mut o = ScriptedPlayer::new(Letter::O, &[0, 3, 4]);

        let outcome = play(&mut board, &mut x, &mut o, &mut SilentPresenter).unwrap();

        assert_eq!(outcome, Outcome::Win(Letter::X));
        assert_eq!(x.calls, 3);
        assert_eq!(o.calls, 3);
        assert_eq!(board.get(3), Some(Letter::O));
        assert_eq!(board.get(4), Some(Letter::O));
    }

    #[test]
    fn full_board_reports_a_draw() {
        let mut board: Board = "XOXXOOOXX".parse().unwrap();
        let mut x = ScriptedPlayer::new(Letter::X, &[]);
        let mut o = ScriptedPlayer::new(Letter::O, &[]);
        let mut presenter = ConsolePresenter::new(Vec::new(), Duration::ZERO);

        let outcome = play(&mut board, &mut x, &mut o, &mut presenter).unwrap();

        assert_eq!(outcome, Outcome::Draw);
        let output = String::from_utf8(presenter.into_output()).unwrap();
        assert!(output.ends_with("It's a tie!\n"));
        assert_eq!(x.calls + o.calls, 0);
    }

    #[test]
    fn player_errors_stop_the_game() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Letter::X, &[4]);
        let mut o = ScriptedPlayer::new(Letter::O, &[]);

        let result = play(&mut board, &mut x, &mut o, &mut SilentPresenter);

        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(board.get(4), Some(Letter::X));
    }

    #[test]
    fn console_game_ends_with_the_winner() {
        let mut board = Board::new();
        let mut x = ScriptedPlayer::new(Letter::X, &[0, 1, 2]);
        let mut o = ScriptedPlayer::new(Letter::O, &[3, 4]);
        let mut presenter = ConsolePresenter::new(Vec::new(), Duration::ZERO);

        play(&mut board, &mut x, &mut o, &mut presenter).unwrap();

        let output = String::from_utf8(presenter.into_output()).unwrap();
        assert!(output.starts_with("|   |   |   |\n"));
        assert!(output.contains("O makes a move to square 4\n"));
        assert!(output.ends_with("X wins!\n"));
    }
}
