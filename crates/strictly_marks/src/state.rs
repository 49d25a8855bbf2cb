//! Committed engine state.

use super::position::Position;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Read-only view of the engine's committed state.
///
/// Observers receive a shared borrow of this during notification; callers
/// get one from [`GameEngine::state`](crate::GameEngine::state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    turns_passed: usize,
    game_over: bool,
}

impl GameState {
    /// Initial state: empty board, `First` to move, nothing played.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::First,
            turns_passed: 0,
            game_over: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the player who made the final move once the game is over.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Number of accepted moves since construction or the last reset.
    pub fn turns_passed(&self) -> usize {
        self.turns_passed
    }

    /// Returns true once a move has won or filled the board.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns true if the current player may mark `pos`.
    pub fn can_move(&self, pos: Position) -> bool {
        !self.game_over && self.board.is_empty(pos)
    }

    /// Marks `pos` for the current player and counts the turn.
    pub(crate) fn place(&mut self, pos: Position) -> Mark {
        let player = self.current_turn;
        self.board.set(pos, player);
        self.turns_passed += 1;
        player
    }

    /// Hands the turn to the other player.
    pub(crate) fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Marks the game as finished.
    pub(crate) fn finish(&mut self) {
        self.game_over = true;
    }

    /// Mutable board access that bypasses the turn counter.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
