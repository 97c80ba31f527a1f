//! Replay scripts: a starting position and a move list loaded from TOML.
//!
//! ```toml
//! to_move = "White"
//!
//! [rules]
//! exclude_self_stalemate = false
//!
//! [[pieces]]
//! row = 1
//! col = 5
//! team = "White"
//! kind = "King"
//!
//! [[moves]]
//! from = [2, 5]
//! to = [4, 5]
//! ```
//!
//! Without `[[pieces]]` the game starts from the standard position.

use crate::action::Move;
use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::game::Game;
use crate::rules::RuleSet;
use crate::types::{Piece, PieceKind, Team};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A piece placement in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Placement {
    /// Row, 1..=8.
    row: i32,
    /// Column, 1..=8.
    col: i32,
    /// Owning team.
    team: Team,
    /// Piece kind.
    kind: PieceKind,
}

impl Placement {
    /// Creates a placement.
    pub fn new(row: i32, col: i32, team: Team, kind: PieceKind) -> Self {
        Self {
            row,
            col,
            team,
            kind,
        }
    }
}

/// A scripted game: optional custom position, rules and a move list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Rule switches.
    #[serde(default)]
    rules: RuleSet,

    /// Team to move first. Defaults to White.
    #[serde(default)]
    to_move: Option<Team>,

    /// Custom position. Empty means the standard start.
    #[serde(default)]
    pieces: Vec<Placement>,

    /// Moves to play in order.
    #[serde(default)]
    moves: Vec<Move>,
}

impl ReplayScript {
    /// Creates a script from its parts.
    #[instrument(skip(pieces, moves), fields(pieces = pieces.len(), moves = moves.len()))]
    pub fn new(
        rules: RuleSet,
        to_move: Option<Team>,
        pieces: Vec<Placement>,
        moves: Vec<Move>,
    ) -> Self {
        Self {
            rules,
            to_move,
            pieces,
            moves,
        }
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse replay script: {}", e)))
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading replay script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read replay script: {}", e)))?;

        let script = Self::from_toml(&content)?;
        info!(
            pieces = script.pieces.len(),
            moves = script.moves.len(),
            "Replay script loaded"
        );
        Ok(script)
    }

    /// Builds the starting game described by the script. No moves are played.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> Game {
        let mut game = Game::with_rules(self.rules);
        if !self.pieces.is_empty() {
            let mut board = Board::new();
            for p in &self.pieces {
                let at = Coordinate::new(p.row, p.col);
                if !at.is_valid() {
                    warn!(row = p.row, col = p.col, "Placement off the board ignored");
                }
                board.place(at, Piece::new(p.team, p.kind));
            }
            game.set_board(board);
        }
        if let Some(team) = self.to_move {
            game.set_team_turn(team);
        }
        game
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
