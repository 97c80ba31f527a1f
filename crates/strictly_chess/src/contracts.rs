//! Contract-based validation for chess moves.
//!
//! Contracts state correctness as preconditions and postconditions,
//! Hoare-style: `{P} action {Q}`. [`Game::make_move`] runs the
//! preconditions on every call and the postconditions in debug builds.

use crate::action::{InvalidMove, Move};
use crate::game::Game;
use crate::invariants::{ChessMoveInvariants, InvariantSet, InvariantViolation, Transition};
use crate::types::Piece;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// Takes `&mut S` because deciding legality may probe the state.
    /// The state is unchanged when this returns.
    fn pre(state: &mut S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a piece stands on the origin.
pub struct PieceAtOrigin;

impl PieceAtOrigin {
    /// Returns the piece on the origin.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> Result<Piece, InvalidMove> {
        game.board()
            .get(mv.from())
            .ok_or(InvalidMove::EmptySquare(mv.from()))
    }
}

/// Precondition: the piece belongs to the team to move.
pub struct MoversTurn;

impl MoversTurn {
    /// Fails with [`InvalidMove::OutOfTurn`] for the team not on move.
    #[instrument(skip(game))]
    pub fn check(piece: &Piece, game: &Game) -> Result<(), InvalidMove> {
        if piece.team() != game.team_turn() {
            Err(InvalidMove::OutOfTurn {
                to_move: game.team_turn(),
                piece_team: piece.team(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move is one of the origin piece's legal moves.
pub struct InLegalSet;

impl InLegalSet {
    /// Fails with [`InvalidMove::NotLegal`] if `mv` is not generated for its origin.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &mut Game) -> Result<(), InvalidMove> {
        let legal = game
            .legal_moves(mv.from())
            .is_some_and(|moves| moves.contains(mv));
        if legal {
            Ok(())
        } else {
            Err(InvalidMove::NotLegal(*mv))
        }
    }
}

/// Composite precondition: piece on origin, right team, legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the moving piece.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &mut Game) -> Result<Piece, InvalidMove> {
        let piece = PieceAtOrigin::check(mv, game)?;
        MoversTurn::check(&piece, game)?;
        InLegalSet::check(mv, game)?;
        Ok(piece)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for chess moves.
///
/// Preconditions:
/// - A piece stands on the origin
/// - It belongs to the team to move
/// - The move is in its legal set
///
/// Postconditions:
/// - Origin is empty
/// - Destination holds the mover or its promotion
/// - Turn passed to the other team
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &mut Game, action: &Move) -> Result<(), InvalidMove> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game, action: &Move) -> Result<(), Vec<InvariantViolation>> {
        ChessMoveInvariants::check_all(&Transition {
            before,
            after,
            action: *action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::types::{PieceKind, Team};

    fn sq(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_precondition_accepts_opening_move() {
        let mut game = Game::new();
        let action = Move::new(sq(2, 5), sq(4, 5));
        assert!(MoveContract::pre(&mut game, &action).is_ok());
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_precondition_empty_square() {
        let mut game = Game::new();
        let action = Move::new(sq(4, 5), sq(5, 5));
        assert_eq!(
            MoveContract::pre(&mut game, &action),
            Err(InvalidMove::EmptySquare(sq(4, 5)))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let mut game = Game::new();
        let action = Move::new(sq(7, 5), sq(5, 5));
        assert!(matches!(
            MoveContract::pre(&mut game, &action),
            Err(InvalidMove::OutOfTurn {
                to_move: Team::White,
                piece_team: Team::Black
            })
        ));
    }

    #[test]
    fn test_precondition_not_legal() {
        let mut game = Game::new();
        let action = Move::new(sq(2, 5), sq(5, 5));
        assert_eq!(
            MoveContract::pre(&mut game, &action),
            Err(InvalidMove::NotLegal(action))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        let action = Move::new(sq(1, 2), sq(3, 3));
        after.make_move(action).unwrap();
        assert!(MoveContract::post(&before, &after, &action).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        let action = Move::new(sq(1, 2), sq(3, 3));
        after.make_move(action).unwrap();

        after
            .board
            .place(sq(1, 2), Piece::new(Team::White, PieceKind::Knight));
        let violations = MoveContract::post(&before, &after, &action).unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
