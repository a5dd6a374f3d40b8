//! Win condition checking
//!
//! A game is won by fully marking one of the 8 fixed lines:
//! 3 rows, 3 columns, 2 diagonals.

use crate::board::{Board, Mark};

/// The 8 winning lines, scanned in order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A decided game: the winning mark and the line that completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl Win {
    /// Check if a cell index belongs to the winning line
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.line.contains(&idx)
    }
}

/// Check for a winner
///
/// Returns the first complete line in `WINNING_LINES` order, `None`
/// when no line is complete. Legal play can complete at most one line,
/// so the scan order only matters on inconsistent boards.
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board.get_index(a);
        if !mark.is_empty() && mark == board.get_index(b) && mark == board.get_index(c) {
            return Some(Win { mark, line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(idx, mark) in marks {
            board.place_mark(idx, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|idx| (idx, Mark::O)));
            let win = check_winner(&board).expect("complete line should win");
            assert_eq!(win.mark, Mark::O);
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_top_row_win() {
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line, [0, 1, 2]);
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(check_winner(&board).unwrap().line, [1, 4, 7]);
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert_eq!(check_winner(&board).unwrap().line, [0, 4, 8]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(check_winner(&board).unwrap().line, [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_two_in_a_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_breaks_ties() {
        // Top row and left column both complete. Unreachable through
        // legal play, but the scan order must still be deterministic.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(check_winner(&board).unwrap().line, [0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_win_contains() {
        let win = Win {
            mark: Mark::X,
            line: [0, 4, 8],
        };
        assert!(win.contains(0));
        assert!(win.contains(4));
        assert!(!win.contains(1));
    }
}
