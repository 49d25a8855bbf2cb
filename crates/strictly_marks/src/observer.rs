//! Engine notifications.
//!
//! Observers are called synchronously, in registration order, before the
//! triggering operation returns. Each call gets a shared borrow of the
//! committed [`GameState`], so observers can read but never mutate it.

use super::outcome::GameResult;
use super::position::Position;
use super::state::GameState;
use tracing::{instrument, trace};

/// A state transition announced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameEvent {
    /// A move was accepted.
    #[display("move made at {}", _0)]
    MoveMade(Position),
    /// The last accepted move ended the game.
    #[display("game ended: {}", _0)]
    GameEnded(GameResult),
    /// The engine was reset.
    #[display("game restarted")]
    GameRestarted,
}

/// Receiver for engine notifications.
///
/// Every method defaults to doing nothing; implement the ones you need.
///
/// # Examples
///
/// ```
/// use strictly_marks::{GameEngine, GameObserver, GameResult, GameState};
/// use std::sync::{Arc, Mutex};
///
/// struct Scoreboard(Arc<Mutex<Vec<GameResult>>>);
///
/// impl GameObserver for Scoreboard {
///     fn on_game_ended(&mut self, _state: &GameState, result: &GameResult) {
///         self.0.lock().unwrap().push(*result);
///     }
/// }
///
/// let results = Arc::new(Mutex::new(Vec::new()));
/// let mut engine = GameEngine::new();
/// engine.attach(Scoreboard(results.clone()));
/// for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
///     engine.apply_move(row, col).unwrap();
/// }
/// assert_eq!(results.lock().unwrap().len(), 1);
/// ```
pub trait GameObserver: Send {
    /// Called after every accepted move.
    fn on_move_made(&mut self, _state: &GameState, _position: Position) {}

    /// Called once per game, after the `on_move_made` of the terminal move.
    fn on_game_ended(&mut self, _state: &GameState, _result: &GameResult) {}

    /// Called after every reset, once the fresh state is in place.
    fn on_game_restarted(&mut self, _state: &GameState) {}

    /// Dispatches an event to the matching method.
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::MoveMade(position) => self.on_move_made(state, *position),
            GameEvent::GameEnded(result) => self.on_game_ended(state, result),
            GameEvent::GameRestarted => self.on_game_restarted(state),
        }
    }
}

/// Handle returned on registration; pass it to
/// [`GameEngine::unsubscribe`](crate::GameEngine::unsubscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription #{}", _0)]
pub struct SubscriptionId(u64);

pub(crate) struct OnMoveMade<F>(pub(crate) F);

impl<F> GameObserver for OnMoveMade<F>
where
    F: FnMut(&GameState, Position) + Send,
{
    fn on_move_made(&mut self, state: &GameState, position: Position) {
        (self.0)(state, position)
    }
}

pub(crate) struct OnGameEnded<F>(pub(crate) F);

impl<F> GameObserver for OnGameEnded<F>
where
    F: FnMut(&GameState, &GameResult) + Send,
{
    fn on_game_ended(&mut self, state: &GameState, result: &GameResult) {
        (self.0)(state, result)
    }
}

pub(crate) struct OnGameRestarted<F>(pub(crate) F);

impl<F> GameObserver for OnGameRestarted<F>
where
    F: FnMut(&GameState) + Send,
{
    fn on_game_restarted(&mut self, state: &GameState) {
        (self.0)(state)
    }
}

/// Ordered list of registered observers.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
}

impl ObserverRegistry {
    pub(crate) fn register(&mut self, observer: Box<dyn GameObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[instrument(skip(self, state), fields(observers = self.entries.len()))]
    pub(crate) fn emit(&mut self, state: &GameState, event: &GameEvent) {
        trace!("Delivering event");
        for (_, observer) in &mut self.entries {
            observer.on_event(state, event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field("observers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::default();
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            registry.register(Box::new(OnGameRestarted(move |_: &GameState| {
                log.lock().unwrap().push(tag)
            })));
        }

        registry.emit(&GameState::new(), &GameEvent::GameRestarted);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove() {
        let mut registry = ObserverRegistry::default();
        let a = registry.register(Box::new(OnGameRestarted(|_: &GameState| {})));
        let b = registry.register(Box::new(OnGameRestarted(|_: &GameState| {})));
        assert_ne!(a, b);
        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_closure_adapters_ignore_other_events() {
        let count = Arc::new(Mutex::new(0));
        let mut registry = ObserverRegistry::default();
        let counter = count.clone();
        registry.register(Box::new(OnMoveMade(move |_: &GameState, _: Position| {
            *counter.lock().unwrap() += 1
        })));

        registry.emit(&GameState::new(), &GameEvent::GameRestarted);
        assert_eq!(*count.lock().unwrap(), 0);

        let pos = Position::new(0, 0).unwrap();
        registry.emit(&GameState::new(), &GameEvent::MoveMade(pos));
        assert_eq!(*count.lock().unwrap(), 1);
    }
}
