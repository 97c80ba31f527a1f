//! Game rules for chess.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so that the game, contracts and tests can compose them.
//! Probing functions take `&mut Board` because they apply candidate moves
//! in place through [`Speculation`] and restore the board before returning.

pub mod check;
pub mod legality;
pub mod movement;
pub mod speculation;

pub use check::{has_no_safe_move, is_in_check, is_in_checkmate, is_in_stalemate};
pub use legality::legal_moves;
pub use movement::pseudo_legal_moves;
pub use speculation::Speculation;

use serde::{Deserialize, Serialize};

/// Rule switches applied by a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Drop moves after which the mover's own side would be in stalemate.
    ///
    /// Standard chess has no such rule. It is on by default to match the
    /// established behaviour of this engine.
    pub exclude_self_stalemate: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            exclude_self_stalemate: true,
        }
    }
}

impl RuleSet {
    /// Rules of standard chess (minus castling and en passant).
    pub fn standard() -> Self {
        Self {
            exclude_self_stalemate: false,
        }
    }
}
