//! Filtering pseudo-legal moves down to legal ones.

use super::RuleSet;
use super::check::{is_in_check, is_in_stalemate};
use super::movement::pseudo_legal_moves;
use super::speculation::Speculation;
use crate::action::Move;
use crate::board::Board;
use crate::coordinate::Coordinate;
use tracing::{instrument, trace};

/// Legal moves for the piece on `from`, or `None` if the square is empty.
///
/// A candidate is kept only if, after playing it, the mover is not in check.
/// With [`RuleSet::exclude_self_stalemate`] set, a candidate after which the
/// mover itself would be in stalemate is dropped too. The board is back in
/// its original state on return.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &mut Board, from: Coordinate, rules: RuleSet) -> Option<Vec<Move>> {
    let piece = board.get(from)?;
    let team = piece.team();
    let candidates = pseudo_legal_moves(piece, board, from);

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        let mut probe = Speculation::apply(board, &mv);
        if is_in_check(&probe, team) {
            trace!(candidate = %mv, "Rejected: leaves own king in check");
            continue;
        }
        if rules.exclude_self_stalemate && is_in_stalemate(probe.board_mut(), team) {
            trace!(candidate = %mv, "Rejected: stalemates own side");
            continue;
        }
        legal.push(mv);
    }
    Some(legal)
}
