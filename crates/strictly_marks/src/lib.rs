//! Strictly Marks - rules engine for a two-player 3x3 marking game.
//!
//! The engine tracks the board, enforces move legality, detects wins and
//! draws, and notifies observers synchronously as the game moves along.
//! It draws nothing and reads no input; a presentation layer drives it
//! through [`GameEngine`] and listens to its notifications.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the [`GameState`] and applies moves
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **Observers**: `MoveMade`, `GameEnded` and `GameRestarted` notifications
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_marks::{GameEngine, Mark, MoveError, WinInfo};
//!
//! let mut engine = GameEngine::new();
//! engine.on_game_ended(|state, result| {
//!     assert!(state.is_game_over());
//!     assert_eq!(result.winner(), Mark::First);
//! });
//!
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply_move(row, col)?;
//! }
//! let outcome = engine.apply_move(2, 2)?;
//! assert_eq!(outcome.result().and_then(|r| r.win_info()), Some(WinInfo::MainDiagonal));
//! assert_eq!(engine.apply_move(1, 0), Err(MoveError::GameOver));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod observer;
mod outcome;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::GameEngine;
pub use error::MoveError;
pub use observer::{GameEvent, GameObserver, SubscriptionId};
pub use outcome::{GameResult, LineKind, MoveOutcome, WinInfo};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, CELL_COUNT, Mark};
