//! Scoped speculative move application.
//!
//! Legality probing mutates the live board. [`Speculation`] applies a move
//! when it is created and undoes it when dropped, so the board is restored
//! on every exit path. Outside the crate the guard gives read-only access
//! to the board.

use crate::action::Move;
use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::types::Piece;
use std::ops::Deref;

/// A move applied to a board for the lifetime of the guard.
///
/// A promoting move lands as the promoted kind. On drop the original piece
/// goes back to the origin and whatever stood on the destination is put
/// back.
///
/// Callers see the board read-only through the guard:
///
/// ```compile_fail
/// use strictly_chess::rules::Speculation;
/// use strictly_chess::{Board, Coordinate, Move};
///
/// let mut board = Board::standard();
/// let mv = Move::new(Coordinate::new(2, 5), Coordinate::new(4, 5));
/// let mut probe = Speculation::apply(&mut board, &mv);
/// probe.remove(Coordinate::new(1, 1));
/// ```
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    from: Coordinate,
    to: Coordinate,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl<'a> Speculation<'a> {
    /// Applies `mv` to `board` until the guard is dropped.
    pub fn apply(board: &'a mut Board, mv: &Move) -> Self {
        let from = mv.from();
        let to = mv.to();
        let moved = board.get(from);
        let captured = board.get(to);
        if let Some(piece) = moved {
            let landed = match mv.promotion() {
                Some(kind) => Piece::new(piece.team(), kind),
                None => piece,
            };
            board.place(to, landed);
            board.remove(from);
        }
        Self {
            board,
            from,
            to,
            moved,
            captured,
        }
    }

    /// Piece that stood on the destination before the move.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Mutable board access for stacking a further speculation.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        let Some(piece) = self.moved else {
            return;
        };
        match self.captured {
            Some(captured) => self.board.place(self.to, captured),
            None => self.board.remove(self.to),
        }
        self.board.place(self.from, piece);
    }
}
