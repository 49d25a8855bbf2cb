//! Core domain types: marks and the board.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Content of one cell, or the identity of a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Unmarked cell.
    #[default]
    #[display("None")]
    None,
    /// The player who moves first.
    #[display("First")]
    First,
    /// The player who moves second.
    #[display("Second")]
    Second,
}

impl Mark {
    /// Returns the other player. `None` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::None => Mark::None,
        }
    }

    /// Returns true for `First` and `Second`.
    pub fn is_player(self) -> bool {
        self != Mark::None
    }
}

/// 3x3 board of marks.
///
/// Only the engine can change cells; everything else receives copies
/// or shared borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::None; CELL_COUNT],
        }
    }

    /// Gets the mark at a position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Gets the mark at (row, col), or `None` when the coordinates are off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        Position::new(row, col).ok().map(|pos| self.get(pos))
    }

    /// Marks a cell. Callers guarantee the cell is currently empty.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::None
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Mark; 3]; 3] {
        let mut rows = [[Mark::None; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos);
        }
        rows
    }

    /// Counts cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Counts marked cells.
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.count(Mark::None)
    }

    /// Returns the empty cells in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board using the given symbols for First, Second and empty cells.
    pub fn render(&self, first: &str, second: &str, empty: &str) -> String {
        let mut result = String::new();
        for (row, marks) in self.rows().iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                result.push_str(match mark {
                    Mark::First => first,
                    Mark::Second => second,
                    Mark::None => empty,
                });
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
