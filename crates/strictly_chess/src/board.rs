//! 8x8 piece storage. No rule knowledge lives here.

use crate::coordinate::Coordinate;
use crate::types::{Piece, PieceKind, Team};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Major pieces in column order for a back rank.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board: every valid coordinate maps to an optional piece.
///
/// Operations given an invalid coordinate are no-ops (writes) or report an
/// empty square (reads). The board accepts any arrangement of pieces,
/// including positions illegal under the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row - 1][col - 1]`.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard starting position.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Puts `piece` on `coord`, replacing any occupant.
    pub fn place(&mut self, coord: Coordinate, piece: Piece) {
        if let Some((r, c)) = coord.index() {
            self.squares[r][c] = Some(piece);
        }
    }

    /// Returns the occupant of `coord`, if any.
    pub fn get(&self, coord: Coordinate) -> Option<Piece> {
        coord.index().and_then(|(r, c)| self.squares[r][c])
    }

    /// Clears `coord`.
    pub fn remove(&mut self, coord: Coordinate) {
        if let Some((r, c)) = coord.index() {
            self.squares[r][c] = None;
        }
    }

    /// Returns true if `coord` is on the board and unoccupied.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        coord.is_valid() && self.get(coord).is_none()
    }

    /// Clears the board and sets up the standard starting position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for team in [Team::White, Team::Black] {
            let back = team.back_row() as i32;
            let pawns = team.pawn_start_row() as i32;
            for (i, kind) in BACK_RANK.iter().enumerate() {
                let col = i as i32 + 1;
                self.place(Coordinate::new(back, col), Piece::new(team, *kind));
                self.place(
                    Coordinate::new(pawns, col),
                    Piece::new(team, PieceKind::Pawn),
                );
            }
        }
    }

    /// Iterates occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |coord| self.get(coord).map(|p| (coord, p)))
    }

    /// Iterates the squares holding pieces of `team`.
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.team() == team)
    }

    /// Finds `team`'s king. With several kings, the first in row-major order.
    pub fn king_of(&self, team: Team) -> Option<Coordinate> {
        self.pieces_of(team)
            .find(|(_, p)| p.kind() == PieceKind::King)
            .map(|(coord, _)| coord)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{row} ")?;
            for col in 1..=8 {
                let symbol = self
                    .get(Coordinate::new(row, col))
                    .map_or('.', |p| p.symbol());
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  12345678")
    }
}
