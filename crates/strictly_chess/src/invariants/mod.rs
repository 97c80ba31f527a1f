//! First-class invariants over a single chess move.
//!
//! Each invariant is a logical property of a [`Transition`]: the game
//! before a move, the game after it, and the move itself. They are testable
//! on their own and back the postconditions of
//! [`MoveContract`](crate::contracts::MoveContract).

use crate::action::Move;
use crate::game::Game;
use derive_more::Display;

pub mod destination_settled;
pub mod origin_vacated;
pub mod turn_flipped;

pub use destination_settled::DestinationSettledInvariant;
pub use origin_vacated::OriginVacatedInvariant;
pub use turn_flipped::TurnFlippedInvariant;

/// A property every applied move must preserve.
pub trait Invariant<S> {
    /// True if the property holds.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;

    /// The violation for `state`, if the property fails.
    fn violation(state: &S) -> Option<InvariantViolation> {
        (!Self::holds(state)).then(|| InvariantViolation::new(Self::description()))
    }
}

/// A broken post-move property.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Which property failed.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation report.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants evaluated as a group, in declaration order.
pub trait InvariantSet<S> {
    /// Every failing member's violation.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// `Ok` when no member fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations = Self::violations(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                [$($member::violation(state)),+].into_iter().flatten().collect()
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// One applied move: the game before and after, and the move played.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Game before the move.
    pub before: &'a Game,
    /// Game after the move.
    pub after: &'a Game,
    /// The move played.
    pub action: Move,
}

/// Every post-move invariant.
pub type ChessMoveInvariants = (
    OriginVacatedInvariant,
    DestinationSettledInvariant,
    TurnFlippedInvariant,
);
