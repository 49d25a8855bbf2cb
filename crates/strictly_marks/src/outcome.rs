//! Terminal outcomes and per-move results.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// The four kinds of winning line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// The line that won the game.
///
/// Rows and columns carry their index (0-2); diagonals are unique.
/// Deserialization rejects indices above 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWinInfo")]
pub enum WinInfo {
    /// A completed row.
    Row(usize),
    /// A completed column.
    Column(usize),
    /// The completed main diagonal.
    MainDiagonal,
    /// The completed anti-diagonal.
    AntiDiagonal,
}

/// Unchecked wire form of a [`WinInfo`].
#[derive(Deserialize)]
enum RawWinInfo {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

/// A row or column index that is off the board.
#[derive(Debug, derive_more::Display)]
#[display("Line index {} is outside the 3x3 board", _0)]
struct OffBoardLine(usize);

impl TryFrom<RawWinInfo> for WinInfo {
    type Error = OffBoardLine;

    fn try_from(raw: RawWinInfo) -> Result<Self, Self::Error> {
        match raw {
            RawWinInfo::Row(i) | RawWinInfo::Column(i) if i > 2 => Err(OffBoardLine(i)),
            RawWinInfo::Row(i) => Ok(WinInfo::Row(i)),
            RawWinInfo::Column(i) => Ok(WinInfo::Column(i)),
            RawWinInfo::MainDiagonal => Ok(WinInfo::MainDiagonal),
            RawWinInfo::AntiDiagonal => Ok(WinInfo::AntiDiagonal),
        }
    }
}

impl WinInfo {
    /// Returns the kind of line.
    pub fn kind(self) -> LineKind {
        match self {
            WinInfo::Row(_) => LineKind::Row,
            WinInfo::Column(_) => LineKind::Column,
            WinInfo::MainDiagonal => LineKind::MainDiagonal,
            WinInfo::AntiDiagonal => LineKind::AntiDiagonal,
        }
    }

    /// Returns the row or column index; `None` for diagonals.
    pub fn index(self) -> Option<usize> {
        match self {
            WinInfo::Row(i) | WinInfo::Column(i) => Some(i),
            WinInfo::MainDiagonal | WinInfo::AntiDiagonal => None,
        }
    }

    /// Returns the three cells of this line, or `None` if a row or column
    /// index is off the board.
    pub fn positions(self) -> Option<[Position; 3]> {
        let coords = match self {
            WinInfo::Row(r) => [(r, 0), (r, 1), (r, 2)],
            WinInfo::Column(c) => [(0, c), (1, c), (2, c)],
            WinInfo::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            WinInfo::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        };
        let [a, b, c] = coords.map(|(row, col)| Position::new(row, col).ok());
        Some([a?, b?, c?])
    }
}

impl std::fmt::Display for WinInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinInfo::Row(i) => write!(f, "row {}", i),
            WinInfo::Column(i) => write!(f, "column {}", i),
            WinInfo::MainDiagonal => write!(f, "main diagonal"),
            WinInfo::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Final outcome of a game.
///
/// Built once, when the terminal move is applied, and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    winner: Mark,
    win_info: Option<WinInfo>,
}

impl GameResult {
    /// A win for `winner` along `line`.
    pub(crate) fn win(winner: Mark, line: WinInfo) -> Self {
        Self {
            winner,
            win_info: Some(line),
        }
    }

    /// A draw: no winner, no line.
    pub(crate) fn draw() -> Self {
        Self {
            winner: Mark::None,
            win_info: None,
        }
    }

    /// The winning mark, or `Mark::None` for a draw.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// The winning line, absent for a draw.
    pub fn win_info(&self) -> Option<WinInfo> {
        self.win_info
    }

    /// Returns true if the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.winner == Mark::None
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.win_info {
            Some(line) => write!(f, "{} wins on the {}", self.winner, line),
            None => write!(f, "Draw"),
        }
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on; `next` is the player to move.
    Continued {
        /// Player whose turn it now is.
        next: Mark,
    },
    /// The move ended the game.
    Ended(GameResult),
}

impl MoveOutcome {
    /// Returns the result if the move ended the game.
    pub fn result(&self) -> Option<GameResult> {
        match self {
            MoveOutcome::Ended(result) => Some(*result),
            MoveOutcome::Continued { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_and_index() {
        assert_eq!(WinInfo::Row(2).kind(), LineKind::Row);
        assert_eq!(WinInfo::Row(2).index(), Some(2));
        assert_eq!(WinInfo::Column(0).index(), Some(0));
        assert_eq!(WinInfo::AntiDiagonal.kind(), LineKind::AntiDiagonal);
        assert_eq!(WinInfo::MainDiagonal.index(), None);
    }

    #[test]
    fn test_positions() {
        let cells: Vec<usize> = WinInfo::AntiDiagonal
            .positions()
            .unwrap()
            .iter()
            .map(|p| p.to_index())
            .collect();
        assert_eq!(cells, vec![2, 4, 6]);

        let cells: Vec<usize> = WinInfo::Column(1)
            .positions()
            .unwrap()
            .iter()
            .map(|p| p.to_index())
            .collect();
        assert_eq!(cells, vec![1, 4, 7]);
    }

    #[test]
    fn test_off_board_line_has_no_positions() {
        assert_eq!(WinInfo::Row(7).positions(), None);
        assert_eq!(WinInfo::Column(3).positions(), None);
    }

    #[test]
    fn test_deserialize_checks_line_index() {
        let line: WinInfo = serde_json::from_str(r#"{"Row":2}"#).unwrap();
        assert_eq!(line, WinInfo::Row(2));

        let err = serde_json::from_str::<WinInfo>(r#"{"Row":7}"#).unwrap_err();
        assert!(err.to_string().contains("outside the 3x3 board"));
        assert!(serde_json::from_str::<WinInfo>(r#"{"Column":3}"#).is_err());
        assert!(serde_json::from_str::<GameResult>(
            r#"{"winner":"First","win_info":{"Column":9}}"#
        )
        .is_err());
    }

    #[test]
    fn test_draw_result() {
        let result = GameResult::draw();
        assert!(result.is_draw());
        assert_eq!(result.winner(), Mark::None);
        assert_eq!(result.win_info(), None);
        assert_eq!(result.to_string(), "Draw");
    }

    #[test]
    fn test_win_result_display() {
        let result = GameResult::win(Mark::Second, WinInfo::Column(2));
        assert!(!result.is_draw());
        assert_eq!(result.to_string(), "Second wins on the column 2");
    }

    #[test]
    fn test_line_kinds() {
        let names: Vec<String> = LineKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["Row", "Column", "MainDiagonal", "AntiDiagonal"]);
    }

    #[test]
    fn test_result_serializes() {
        let result = GameResult::win(Mark::First, WinInfo::MainDiagonal);
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
