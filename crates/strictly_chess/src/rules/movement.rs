//! Pseudo-legal move generation.
//!
//! These moves follow each piece's movement pattern along with blocking and
//! capture rules. Whether a move exposes the mover's own king is decided in
//! [`legality`](super::legality).

use crate::action::Move;
use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::types::{Piece, PieceKind, Team};
use tracing::instrument;

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
];

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Longest ray on an 8x8 board.
const MAX_RAY: i32 = 7;

impl Piece {
    /// Enumerates the moves this piece could make from `from`, ignoring check.
    ///
    /// Never yields a move off the board, onto `from`, or onto a piece of the
    /// same team. Reads the board only.
    pub fn pseudo_legal_moves(&self, board: &Board, from: Coordinate) -> Vec<Move> {
        pseudo_legal_moves(*self, board, from)
    }
}

/// Enumerates pseudo-legal moves for `piece` standing on `from`.
#[instrument(level = "trace", skip(board))]
pub fn pseudo_legal_moves(piece: Piece, board: &Board, from: Coordinate) -> Vec<Move> {
    if !from.is_valid() {
        return Vec::new();
    }
    let team = piece.team();
    match piece.kind() {
        PieceKind::King => step_moves(board, from, team, &KING_STEPS),
        PieceKind::Knight => step_moves(board, from, team, &KNIGHT_JUMPS),
        PieceKind::Rook => ray_moves(board, from, team, &ORTHOGONAL),
        PieceKind::Bishop => ray_moves(board, from, team, &DIAGONAL),
        PieceKind::Queen => {
            let mut moves = ray_moves(board, from, team, &ORTHOGONAL);
            moves.extend(ray_moves(board, from, team, &DIAGONAL));
            moves
        }
        PieceKind::Pawn => pawn_moves(board, from, team),
    }
}

/// True if `to` is on the board and not held by `team`.
fn can_land(board: &Board, to: Coordinate, team: Team) -> bool {
    to.is_valid() && board.get(to).is_none_or(|p| p.team() != team)
}

fn step_moves(board: &Board, from: Coordinate, team: Team, offsets: &[(i32, i32)]) -> Vec<Move> {
    offsets
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| can_land(board, to, team))
        .map(|to| Move::new(from, to))
        .collect()
}

fn ray_moves(board: &Board, from: Coordinate, team: Team, directions: &[(i32, i32)]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        for step in 1..=MAX_RAY {
            let to = from.offset(dr * step, dc * step);
            if !to.is_valid() {
                break;
            }
            match board.get(to) {
                None => moves.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.team() != team {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Coordinate, team: Team) -> Vec<Move> {
    let mut moves = Vec::new();
    let dir = team.forward();

    let one = from.offset(dir, 0);
    if board.is_empty(one) {
        push_pawn_move(&mut moves, from, one, team);

        let two = from.offset(2 * dir, 0);
        if from.row() == Some(team.pawn_start_row()) && board.is_empty(two) {
            push_pawn_move(&mut moves, from, two, team);
        }
    }

    for dc in [-1, 1] {
        let to = from.offset(dir, dc);
        if board.get(to).is_some_and(|p| p.team() != team) {
            push_pawn_move(&mut moves, from, to, team);
        }
    }
    moves
}

/// Pushes one move, or one per promotion kind when `to` is the far rank.
fn push_pawn_move(moves: &mut Vec<Move>, from: Coordinate, to: Coordinate, team: Team) {
    if to.row() == Some(team.promotion_row()) {
        moves.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promoting(from, to, kind)),
        );
    } else {
        moves.push(Move::new(from, to));
    }
}
