//! Invariants over the committed engine state.
//!
//! They are checked after every mutation in debug builds and can be
//! tested on their own.

use super::rules;
use super::state::GameState;
use super::types::{CELL_COUNT, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];

        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the turn counter equals the number of marked cells.
pub struct TurnCountMatchesBoard;

impl Invariant<GameState> for TurnCountMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let occupied = state.board().occupied_count();
        let turns = state.turns_passed();
        let valid = occupied == turns && turns <= CELL_COUNT;
        if !valid {
            warn!(occupied, turns, "Turn counter out of sync with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Turn counter equals the number of marked cells"
    }
}

/// Invariant: turns alternate First, Second, First, ...
///
/// While the game runs, `First` moves on even counts. After the terminal
/// move the turn is not switched, so it names the player who just moved.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let turns = state.turns_passed();
        let first_to_act = if state.is_game_over() {
            turns % 2 == 1
        } else {
            turns % 2 == 0
        };
        let expected = if first_to_act { Mark::First } else { Mark::Second };

        let counts_balanced = {
            let first = state.board().count(Mark::First);
            let second = state.board().count(Mark::Second);
            first == second || first == second + 1
        };

        let valid = state.current_turn() == expected && counts_balanced;
        if !valid {
            warn!(
                turns,
                current = %state.current_turn(),
                expected = %expected,
                "Turn order violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns starting with First"
    }
}

/// Invariant: the game-over flag is set exactly on terminal boards.
pub struct GameOverMatchesBoard;

impl Invariant<GameState> for GameOverMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let terminal =
            rules::check_winner(state.board()).is_some() || rules::is_full(state.board());
        let valid = terminal == state.is_game_over();
        if !valid {
            warn!(
                terminal,
                game_over = state.is_game_over(),
                "Game-over flag disagrees with board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Game is over exactly when a line is complete or the board is full"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (TurnCountMatchesBoard, AlternatingTurn, GameOverMatchesBoard);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(state: &GameState) {
    debug_assert!(
        EngineInvariants::check_all(state).is_ok(),
        "Engine invariants violated"
    );
}
