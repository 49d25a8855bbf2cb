//! Win detection.

use super::super::{Board, Mark, Position, WinInfo};
use tracing::instrument;

/// Every line on the board, in the order they are scanned.
pub const LINES: [WinInfo; 8] = [
    WinInfo::Row(0),
    WinInfo::Row(1),
    WinInfo::Row(2),
    WinInfo::Column(0),
    WinInfo::Column(1),
    WinInfo::Column(2),
    WinInfo::MainDiagonal,
    WinInfo::AntiDiagonal,
];

fn line_marked(board: &Board, line: WinInfo, mark: Mark) -> bool {
    line.positions().is_some_and(|cells| cells.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks whether the move at `pos` completed a line for `mark`.
///
/// Only lines through `pos` are examined, in the order row, column,
/// main diagonal, anti-diagonal. The first complete line is returned.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, pos: Position, mark: Mark) -> Option<WinInfo> {
    if !mark.is_player() {
        return None;
    }

    let mut candidates = vec![WinInfo::Row(pos.row()), WinInfo::Column(pos.col())];
    if pos.on_main_diagonal() {
        candidates.push(WinInfo::MainDiagonal);
    }
    if pos.on_anti_diagonal() {
        candidates.push(WinInfo::AntiDiagonal);
    }

    candidates
        .into_iter()
        .find(|&line| line_marked(board, line, mark))
}

/// Scans the whole board for a completed line.
///
/// Returns the owner and the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinInfo)> {
    LINES.iter().find_map(|&line| {
        let [a, _, _] = line.positions()?;
        let mark = board.get(a);
        (mark.is_player() && line_marked(board, line, mark)).then_some((mark, line))
    })
}
