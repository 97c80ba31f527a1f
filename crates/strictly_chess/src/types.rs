//! Core domain types for chess.

use serde::{Deserialize, Serialize};

/// One side of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Team {
    /// Moves first, starts on rows 1 and 2.
    White,
    /// Starts on rows 7 and 8.
    Black,
}

impl Team {
    /// Returns the other team.
    pub fn opponent(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of a pawn step.
    pub fn forward(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row this team's pawns start on.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Row on which this team's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Team::White => 8,
            Team::Black => 1,
        }
    }

    /// Row holding this team's major pieces at the start.
    pub fn back_row(self) -> u8 {
        self.opponent().promotion_row()
    }
}

/// The six kinds of chess piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum PieceKind {
    /// King.
    King,
    /// Queen.
    Queen,
    /// Bishop.
    Bishop,
    /// Knight.
    Knight,
    /// Rook.
    Rook,
    /// Pawn.
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order promotion moves are listed.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns true if a pawn may become this kind.
    pub fn is_promotable(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Single-letter symbol (uppercase).
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece: a team and a kind. Where it stands is recorded by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    pub fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    /// Team owning the piece.
    pub fn team(&self) -> Team {
        self.team
    }

    /// Kind of the piece.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Symbol used in board dumps: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.team {
            Team::White => self.kind.symbol(),
            Team::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.team, self.kind)
    }
}
