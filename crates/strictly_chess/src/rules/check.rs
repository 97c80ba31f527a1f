//! Check, checkmate and stalemate detection.

use super::movement::pseudo_legal_moves;
use super::speculation::Speculation;
use crate::board::Board;
use crate::types::{PieceKind, Team};
use tracing::{instrument, trace};

/// Returns true if any opposing piece has a pseudo-legal move onto `team`'s king.
#[instrument(level = "trace", skip(board))]
pub fn is_in_check(board: &Board, team: Team) -> bool {
    board.pieces_of(team.opponent()).any(|(from, piece)| {
        pseudo_legal_moves(piece, board, from).iter().any(|mv| {
            board
                .get(mv.to())
                .is_some_and(|target| target.team() == team && target.kind() == PieceKind::King)
        })
    })
}

/// Returns true if no pseudo-legal move of `team` leaves `team` out of check.
///
/// Every candidate is applied speculatively and reverted before the next
/// one is tried. Stops at the first escaping move.
#[instrument(level = "trace", skip(board))]
pub fn has_no_safe_move(board: &mut Board, team: Team) -> bool {
    let snapshot: &Board = board;
    let candidates: Vec<_> = snapshot
        .pieces_of(team)
        .flat_map(|(from, piece)| pseudo_legal_moves(piece, snapshot, from))
        .collect();

    for mv in &candidates {
        let probe = Speculation::apply(board, mv);
        if !is_in_check(&probe, team) {
            trace!(escape = %mv, "Found move out of check");
            return false;
        }
    }
    true
}

/// Returns true if `team` is in check and has no move out of it.
#[instrument(level = "trace", skip(board))]
pub fn is_in_checkmate(board: &mut Board, team: Team) -> bool {
    is_in_check(board, team) && has_no_safe_move(board, team)
}

/// Returns true if `team` is not in check but every move would put it in check.
#[instrument(level = "trace", skip(board))]
pub fn is_in_stalemate(board: &mut Board, team: Team) -> bool {
    !is_in_check(board, team) && has_no_safe_move(board, team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::types::Piece;

    fn sq(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_start_position_is_quiet() {
        let mut board = Board::standard();
        for team in [Team::White, Team::Black] {
            assert!(!is_in_check(&board, team));
            assert!(!is_in_checkmate(&mut board, team));
            assert!(!is_in_stalemate(&mut board, team));
        }
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_blocked_rook_gives_no_check() {
        let mut board = Board::new();
        board.place(sq(1, 1), Piece::new(Team::White, PieceKind::King));
        board.place(sq(8, 1), Piece::new(Team::Black, PieceKind::Rook));
        assert!(is_in_check(&board, Team::White));

        board.place(sq(4, 1), Piece::new(Team::White, PieceKind::Bishop));
        assert!(!is_in_check(&board, Team::White));
    }

    #[test]
    fn test_back_rank_mate() {
        let mut board = Board::new();
        board.place(sq(8, 7), Piece::new(Team::Black, PieceKind::King));
        board.place(sq(7, 6), Piece::new(Team::Black, PieceKind::Pawn));
        board.place(sq(7, 7), Piece::new(Team::Black, PieceKind::Pawn));
        board.place(sq(7, 8), Piece::new(Team::Black, PieceKind::Pawn));
        board.place(sq(8, 1), Piece::new(Team::White, PieceKind::Rook));
        board.place(sq(1, 1), Piece::new(Team::White, PieceKind::King));
        let before = board.clone();

        assert!(is_in_check(&board, Team::Black));
        assert!(is_in_checkmate(&mut board, Team::Black));
        assert!(!is_in_stalemate(&mut board, Team::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn test_king_can_capture_attacker() {
        let mut board = Board::new();
        board.place(sq(8, 8), Piece::new(Team::Black, PieceKind::King));
        board.place(sq(7, 7), Piece::new(Team::White, PieceKind::Queen));
        board.place(sq(1, 1), Piece::new(Team::White, PieceKind::King));
        assert!(is_in_check(&board, Team::Black));
        assert!(!is_in_checkmate(&mut board, Team::Black));
    }

    #[test]
    fn test_classic_stalemate() {
        let mut board = Board::new();
        board.place(sq(8, 8), Piece::new(Team::Black, PieceKind::King));
        board.place(sq(6, 7), Piece::new(Team::White, PieceKind::Queen));
        board.place(sq(1, 1), Piece::new(Team::White, PieceKind::King));
        assert!(!is_in_check(&board, Team::Black));
        assert!(is_in_stalemate(&mut board, Team::Black));
        assert!(!is_in_checkmate(&mut board, Team::Black));
    }
}
