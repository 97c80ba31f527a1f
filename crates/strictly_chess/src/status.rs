//! Position verdicts for the side to move.

use crate::types::Team;
use serde::{Deserialize, Serialize};

/// Check/mate/stalemate verdict for the team on move.
///
/// The engine never stops accepting moves on its own. Callers read this
/// and decide when the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The team on move is not in check and has a move out of check.
    Ongoing,
    /// The team is in check but can escape.
    Check(Team),
    /// The team is in check with no escape.
    Checkmate(Team),
    /// The team is not in check but every move would put it in check.
    Stalemate(Team),
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }

    /// Winning team, if the position is checkmate.
    pub fn winner(&self) -> Option<Team> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opponent()),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "In progress"),
            GameStatus::Check(team) => write!(f, "{team} is in check"),
            GameStatus::Checkmate(team) => {
                write!(f, "Checkmate. {} wins", team.opponent())
            }
            GameStatus::Stalemate(team) => write!(f, "Stalemate. {team} has no move"),
        }
    }
}
