//! Origin vacated: the square a piece leaves is empty afterwards.

use super::{Invariant, Transition};

/// Invariant: after a move the origin square is empty.
pub struct OriginVacatedInvariant;

impl Invariant<Transition<'_>> for OriginVacatedInvariant {
    fn holds(t: &Transition<'_>) -> bool {
        t.after.board().get(t.action.from()).is_none()
    }

    fn description() -> &'static str {
        "Origin square is empty after the move"
    }
}
