//! Serializable game snapshot.
//!
//! Outer layers (network, persistence) exchange games as a
//! [`GameSnapshot`] and rebuild a [`Game`] from one.

use crate::board::Board;
use crate::game::Game;
use crate::rules::RuleSet;
use crate::status::GameStatus;
use crate::types::Team;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything needed to resume a game, plus its status at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board state.
    pub board: Board,
    /// Team to move.
    pub to_move: Team,
    /// Rule switches in force.
    #[serde(default)]
    pub rules: RuleSet,
    /// Status when the snapshot was taken. Recomputed on restore.
    pub status: GameStatus,
}

impl Game {
    /// Captures the current game.
    #[instrument(skip(self))]
    pub fn snapshot(&mut self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            rules: self.rules,
            status: self.status(),
        }
    }

    /// Rebuilds a game from a snapshot. The stored status is ignored.
    #[instrument(skip(snapshot), fields(to_move = %snapshot.to_move))]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        debug!(status = %snapshot.status, "Restoring game");
        Self {
            board: snapshot.board,
            to_move: snapshot.to_move,
            rules: snapshot.rules,
        }
    }
}

impl GameSnapshot {
    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::Ongoing | GameStatus::Check(_) => {
                format!("{}. {} to move.", self.status, self.to_move)
            }
            GameStatus::Checkmate(_) | GameStatus::Stalemate(_) => {
                format!("Game over. {}.", self.status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Move};

    #[test]
    fn test_snapshot_restores_position() {
        let mut game = Game::new();
        game.make_move(Move::new(Coordinate::new(2, 4), Coordinate::new(4, 4)))
            .unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.to_move, Team::Black);
        assert_eq!(snapshot.status, GameStatus::Ongoing);

        let restored = Game::from_snapshot(snapshot);
        assert_eq!(restored, game);
    }

    #[test]
    fn test_status_string() {
        let snapshot = Game::new().snapshot();
        assert_eq!(snapshot.status_string(), "In progress. White to move.");
    }
}
