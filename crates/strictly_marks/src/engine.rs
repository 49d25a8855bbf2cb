//! The game engine: move application, reset and notification.

use super::error::MoveError;
use super::invariants::assert_invariants;
use super::observer::{
    GameEvent, GameObserver, ObserverRegistry, OnGameEnded, OnGameRestarted, OnMoveMade,
    SubscriptionId,
};
use super::outcome::{GameResult, MoveOutcome};
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// Rules engine for one 3x3 game.
///
/// The engine owns the board exclusively. Only [`apply_move`](Self::apply_move)
/// and [`reset`](Self::reset) change state, and both notify registered
/// observers before returning.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: GameState,
    observers: ObserverRegistry,
}

impl GameEngine {
    /// Creates an engine with an empty board and `First` to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks (row, col) for the current player.
    ///
    /// On success the move is announced with `MoveMade`; if it completed a
    /// line or filled the board, `GameEnded` follows and the turn is not
    /// switched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if either coordinate is above 2
    /// - [`MoveError::GameOver`] if the game has already ended
    /// - [`MoveError::CellOccupied`] if the cell is marked
    ///
    /// A rejected move changes nothing and notifies no one.
    #[instrument(skip(self), fields(player = %self.state.current_turn()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let position = Position::new(row, col)?;
        self.apply_at(position)
    }

    /// Marks `position` for the current player. See [`apply_move`](Self::apply_move).
    #[instrument(skip(self), fields(player = %self.state.current_turn()))]
    pub fn apply_at(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        if self.state.is_game_over() {
            debug!("Rejected move: game over");
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(position) {
            debug!("Rejected move: cell occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.state.place(position);
        debug!(turns = self.state.turns_passed(), "Move applied");

        let result = match rules::winning_line(self.state.board(), position, player) {
            Some(line) => Some(GameResult::win(player, line)),
            None if rules::is_full(self.state.board()) => Some(GameResult::draw()),
            None => None,
        };

        match result {
            Some(result) => {
                self.state.finish();
                assert_invariants(&self.state);
                info!(%result, turns = self.state.turns_passed(), "Game ended");

                self.observers.emit(&self.state, &GameEvent::MoveMade(position));
                self.observers.emit(&self.state, &GameEvent::GameEnded(result));
                Ok(MoveOutcome::Ended(result))
            }
            None => {
                self.state.switch_turn();
                assert_invariants(&self.state);

                self.observers.emit(&self.state, &GameEvent::MoveMade(position));
                Ok(MoveOutcome::Continued {
                    next: self.state.current_turn(),
                })
            }
        }
    }

    /// Returns true if the current player may mark (row, col) right now.
    ///
    /// Out-of-range coordinates are never playable.
    pub fn can_move(&self, row: usize, col: usize) -> bool {
        Position::new(row, col).is_ok_and(|pos| self.state.can_move(pos))
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// Observers get `GameRestarted` once the new state is in place.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        assert_invariants(&self.state);
        info!("Game restarted");
        self.observers.emit(&self.state, &GameEvent::GameRestarted);
    }

    /// Returns the committed state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        *self.state.board()
    }

    /// Returns the player to move, or the player who made the final move once the game is over.
    pub fn current_turn(&self) -> Mark {
        self.state.current_turn()
    }

    /// Number of accepted moves in the current game.
    pub fn turns_passed(&self) -> usize {
        self.state.turns_passed()
    }

    /// Returns true once the current game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Registers an observer for all three notifications.
    #[instrument(skip(self, observer))]
    pub fn attach(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.observers.register(Box::new(observer))
    }

    /// Registers a callback for accepted moves.
    pub fn on_move_made<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameState, Position) + Send + 'static,
    {
        self.attach(OnMoveMade(callback))
    }

    /// Registers a callback for the end of a game.
    pub fn on_game_ended<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameState, &GameResult) + Send + 'static,
    {
        self.attach(OnGameEnded(callback))
    }

    /// Registers a callback for resets.
    pub fn on_game_restarted<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        self.attach(OnGameRestarted(callback))
    }

    /// Removes a previously registered observer. Returns false if it was already gone.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
