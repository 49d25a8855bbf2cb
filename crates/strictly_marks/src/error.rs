//! Move rejection errors.

use super::position::Position;

/// Why a move was rejected.
///
/// A rejected move leaves the engine untouched and fires no notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 board.
    #[display("Cell ({}, {}) is outside the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has ended; reset before playing again.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
