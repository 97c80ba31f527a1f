//! Destination settled: the mover (or its promotion) stands on the target.

use super::{Invariant, Transition};
use crate::types::Piece;

/// Invariant: the destination holds the piece that left the origin,
/// replaced by the promotion kind when the move promotes.
pub struct DestinationSettledInvariant;

impl Invariant<Transition<'_>> for DestinationSettledInvariant {
    fn holds(t: &Transition<'_>) -> bool {
        let Some(mover) = t.before.board().get(t.action.from()) else {
            return false;
        };
        let expected = match t.action.promotion() {
            Some(kind) => Piece::new(mover.team(), kind),
            None => mover,
        };
        t.after.board().get(t.action.to()) == Some(expected)
    }

    fn description() -> &'static str {
        "Destination holds the moved piece or its promotion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Coordinate, Game, Move, PieceKind, Team};

    #[test]
    fn test_promotion_settles_new_kind() {
        let from = Coordinate::new(7, 3);
        let to = Coordinate::new(8, 3);
        let mut board = Board::new();
        board.place(from, Piece::new(Team::White, PieceKind::Pawn));
        board.place(Coordinate::new(1, 1), Piece::new(Team::White, PieceKind::King));
        board.place(Coordinate::new(8, 8), Piece::new(Team::Black, PieceKind::King));
        let mut before = Game::new();
        before.set_board(board);

        let action = Move::promoting(from, to, PieceKind::Rook);
        let mut after = before.clone();
        after.make_move(action).unwrap();

        let t = Transition {
            before: &before,
            after: &after,
            action,
        };
        assert!(DestinationSettledInvariant::holds(&t));

        let mismatched = Transition {
            action: Move::promoting(from, to, PieceKind::Queen),
            ..t
        };
        assert!(!DestinationSettledInvariant::holds(&mismatched));
    }
}
