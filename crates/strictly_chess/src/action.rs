//! First-class move type and the error returned when a move is refused.

use crate::coordinate::Coordinate;
use crate::types::{PieceKind, Team};
use serde::{Deserialize, Serialize};

/// A move from one square to another, optionally promoting a pawn.
///
/// Equality is structural: two moves are equal iff origin, destination and
/// promotion all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Coordinate,
    to: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a plain move.
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a pawn move that promotes to `kind`.
    pub fn promoting(from: Coordinate, to: Coordinate, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Origin square.
    pub fn from(&self) -> Coordinate {
        self.from
    }

    /// Destination square.
    pub fn to(&self) -> Coordinate {
        self.to
    }

    /// Promotion kind, if this move promotes.
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.promotion {
            Some(kind) => write!(f, "{} -> {} ={}", self.from, self.to, kind),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// A move refused by [`Game::make_move`](crate::Game::make_move).
///
/// Every variant is the same InvalidMove condition: board and turn are left
/// untouched. The variant records which check refused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// No piece stands on the origin (or the origin is off the board).
    #[display("Invalid move: no piece at {}", _0)]
    EmptySquare(Coordinate),

    /// The piece on the origin belongs to the team not on move.
    #[display("Invalid move: it is {}'s turn, not {}'s", to_move, piece_team)]
    OutOfTurn {
        /// Team whose turn it is.
        to_move: Team,
        /// Team owning the piece on the origin.
        piece_team: Team,
    },

    /// The move is not among the legal moves of the origin piece.
    #[display("Invalid move: {} is not legal", _0)]
    NotLegal(Move),
}

impl std::error::Error for InvalidMove {}
