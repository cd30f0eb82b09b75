use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// The mark a player puts on the board. X always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Letter {
    X,
    O,
}

impl Letter {
    /// Returns the other letter.
    pub fn opponent(self) -> Self {
        match self {
            Letter::X => Letter::O,
            Letter::O => Letter::X,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Letter::X => f.write_str("X"),
            Letter::O => f.write_str("O"),
        }
    }
}

/// A 3x3 Tic-Tac-Toe board plus the letter that completed a line, if any.
///
/// Cells are indexed 0..9 in row-major order. The winner is only ever set
/// as a side effect of [`Board::apply_move`] and stays set until
/// [`Board::reset`] or [`Board::retract_move`].
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Board {
    field: [Option<Letter>; CELLS],
    winner: Option<Letter>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell and the winner.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the letter in `index`, or `None` when the cell is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.field.get(index).copied().flatten()
    }

    /// Returns the indices of all empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_empty_squares(&self) -> bool {
        self.field.iter().any(|x| x.is_none())
    }

    pub fn empty_count(&self) -> usize {
        self.field.iter().filter(|x| x.is_none()).count()
    }

    /// True before the first move of a game.
    pub fn is_empty_board(&self) -> bool {
        self.empty_count() == CELLS
    }

    /// Puts `letter` into `index` and records it as the winner if that completes a line.
    ///
    /// Returns `false` without touching the board if the cell is taken or
    /// the index is off the board.
    pub fn apply_move(&mut self, index: usize, letter: Letter) -> bool {
        match self.field.get(index) {
            Some(None) => {}
            _ => return false,
        }

        self.field[index] = Some(letter);
        if self.check_win(index, letter) {
            self.winner = Some(letter);
        }
        true
    }

    /// Empties `index` and clears the winner.
    ///
    /// Only valid for undoing the most recent [`Board::apply_move`] during
    /// search; real games never take moves back.
    pub fn retract_move(&mut self, index: usize) {
        self.field[index] = None;
        self.winner = None;
    }

    /// Checks the lines through `index` for three `letter`s.
    ///
    /// Only the row, the column and, for even indices, the two diagonals
    /// through `index` are inspected, so this is only meaningful right after
    /// a move into `index`.
    pub fn check_win(&self, index: usize, letter: Letter) -> bool {
        let owns = |i: usize| self.field[i] == Some(letter);

        let row = index / 3 * 3;
        if (row..row + 3).all(owns) {
            return true;
        }

        let column = index % 3;
        if (0..3).map(|i| column + i * 3).all(owns) {
            return true;
        }

        if index % 2 == 0 {
            return DIAGONALS
                .iter()
                .any(|diagonal| diagonal.iter().all(|&i| owns(i)));
        }

        false
    }

    pub fn winner(&self) -> Option<Letter> {
        self.winner
    }

    pub fn set_winner(&mut self, winner: Option<Letter>) {
        self.winner = winner;
    }

    /// Scans every line, unlike [`Board::check_win`]. Used when a board is
    /// built from text rather than played move by move.
    fn find_line(&self, letter: Letter) -> bool {
        (0..CELLS).any(|i| self.field[i] == Some(letter) && self.check_win(i, letter))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.field.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Some(letter) => write!(f, " {} |", letter)?,
                    None => write!(f, "   |")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cells in row-major order: `X`, `O`, and one of ` `, `.`, `_`
    /// for an empty cell. Letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELLS {
            return Err(GameError::invalid_board(s, "expected exactly 9 cells"));
        }

        let mut board = Board::new();
        for (i, c) in chars.into_iter().enumerate() {
            board.field[i] = match c {
                'X' | 'x' => Some(Letter::X),
                'O' | 'o' => Some(Letter::O),
                ' ' | '.' | '_' => None,
                _ => return Err(GameError::invalid_board(s, "unknown cell character")),
            };
        }

        let x_count = board.field.iter().filter(|&&c| c == Some(Letter::X)).count();
        let o_count = board.field.iter().filter(|&&c| c == Some(Letter::O)).count();
        if x_count < o_count || x_count - o_count > 1 {
            return Err(GameError::invalid_board(s, "X and O counts are out of turn"));
        }

        match (board.find_line(Letter::X), board.find_line(Letter::O)) {
            (true, true) => return Err(GameError::invalid_board(s, "both letters have a line")),
            (true, false) => board.winner = Some(Letter::X),
            (false, true) => board.winner = Some(Letter::O),
            (false, false) => {}
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Letter, CELLS};

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELLS).collect::<Vec<_>>());
        assert_eq!(board.empty_count(), 9);
        assert!(board.has_empty_squares());
        assert!(board.is_empty_board());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn available_moves_are_ascending() {
        let board: Board = "X O  XO  ".parse().unwrap();
        assert_eq!(board.available_moves(), vec![1, 3, 4, 7, 8]);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn apply_move_on_taken_cell_is_rejected() {
        // arrange
        let mut board = Board::new();
        assert!(board.apply_move(4, Letter::X));
        let before = board;

        // act
        let accepted = board.apply_move(4, Letter::O);

        // assert
        assert!(!accepted);
        assert_eq!(board, before);
        assert_eq!(board.get(4), Some(Letter::X));
    }

    #[test]
    fn apply_move_off_board_is_rejected() {
        let mut board = Board::new();
        assert!(!board.apply_move(9, Letter::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn completing_a_row_sets_winner() {
        let mut board: Board = "XX OO    ".parse().unwrap();
        assert_eq!(board.winner(), None);

        assert!(board.apply_move(2, Letter::X));

        assert_eq!(board.winner(), Some(Letter::X));
    }

    #[test]
    fn check_win_covers_every_line() {
        let lines: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        for line in lines {
            for letter in [Letter::X, Letter::O] {
                let mut board = Board::new();
                for &i in &line {
                    board.field[i] = Some(letter);
                }
                let last = line[2];
                assert!(board.check_win(last, letter), "{line:?} for {letter}");
                assert!(!board.check_win(last, letter.opponent()), "{line:?} for {letter}");
            }
        }
    }

    #[test]
    fn check_win_ignores_lines_not_through_index() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.field[i] = Some(Letter::X);
        }
        board.field[5] = Some(Letter::X);

        assert!(!board.check_win(5, Letter::X));
    }

    #[test]
    fn apply_then_retract_restores_board() {
        let start: Board = "XX OO    ".parse().unwrap();

        for index in start.available_moves() {
            for letter in [Letter::X, Letter::O] {
                let mut board = start;
                assert!(board.apply_move(index, letter));
                board.retract_move(index);
                assert_eq!(board, start);
            }
        }
    }

    #[test]
    fn retract_clears_winner() {
        let mut board: Board = "XX OO    ".parse().unwrap();
        board.apply_move(2, Letter::X);
        assert_eq!(board.winner(), Some(Letter::X));

        board.retract_move(2);

        assert_eq!(board.winner(), None);
        assert_eq!(board.get(2), None);
    }

    #[test]
    fn full_board_without_line_is_a_draw_position() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(!board.has_empty_squares());
        assert!(board.available_moves().is_empty());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn parse_detects_existing_winner() {
        let board: Board = "OOOXX X  ".parse().unwrap();
        assert_eq!(board.winner(), Some(Letter::O));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("XX".parse::<Board>().is_err());
        assert!("XXZOO    ".parse::<Board>().is_err());
        assert!("OO       ".parse::<Board>().is_err());
        assert!("XXX      ".parse::<Board>().is_err());
        assert!("XXXOOO   ".parse::<Board>().is_err());
    }

    #[test]
    fn set_winner_overrides_marker() {
        let mut board = Board::new();
        board.set_winner(Some(Letter::O));
        assert_eq!(board.winner(), Some(Letter::O));
        board.set_winner(None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn reset_clears_everything() {
        let mut board: Board = "XXXOO    ".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_renders_rows() {
        let board: Board = "X O  XO  ".parse().unwrap();
        assert_eq!(
            board.to_string(),
            "| X |   | O |\n|   |   | X |\n| O |   |   |"
        );
    }
}
