//! Turn flipped: every applied move hands the turn to the other team.

use super::{Invariant, Transition};

/// Invariant: the team to move after a move is the opponent of the team before.
pub struct TurnFlippedInvariant;

impl Invariant<Transition<'_>> for TurnFlippedInvariant {
    fn holds(t: &Transition<'_>) -> bool {
        t.after.team_turn() == t.before.team_turn().opponent()
    }

    fn description() -> &'static str {
        "Turn passes to the other team"
    }
}
