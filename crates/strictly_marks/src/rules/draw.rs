//! Draw detection.

use super::super::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // F F S / S F F / F S S
        let mut board = Board::new();
        let marks = [
            Mark::First,
            Mark::First,
            Mark::Second,
            Mark::Second,
            Mark::First,
            Mark::First,
            Mark::First,
            Mark::Second,
            Mark::Second,
        ];
        for (pos, mark) in Position::ALL.iter().zip(marks) {
            board.set(*pos, mark);
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Mark::First);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
