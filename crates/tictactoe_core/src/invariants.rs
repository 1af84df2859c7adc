//! Board invariants checked after every accepted move.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are testable on their own and checked by the session in debug
//! builds.

use super::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
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

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// A board paired with the player whose turn it is.
#[derive(Debug, Clone, Copy)]
pub struct TurnState<'a> {
    /// The board.
    pub board: &'a Board,
    /// Player to move next.
    pub to_move: Player,
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<TurnState<'_>> for BalancedMarksInvariant {
    fn holds(state: &TurnState<'_>) -> bool {
        let x = state.board.mark_count(Player::X);
        let o = state.board.mark_count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: the player to move follows from the mark counts.
///
/// Equal counts mean X moves; otherwise O moves.
pub struct TurnOrderInvariant;

impl Invariant<TurnState<'_>> for TurnOrderInvariant {
    fn holds(state: &TurnState<'_>) -> bool {
        let expected = if state.board.mark_count(Player::X) == state.board.mark_count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        state.to_move == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, TurnOrderInvariant);
