//! Strictly Chess - a pure chess rules engine
//!
//! Owns board state, generates legal moves, detects check, checkmate and
//! stalemate, and enforces turn order. Rendering, transport and notation
//! belong to the layers that consume it.
//!
//! # Architecture
//!
//! - **Coordinate**: validity-checked `(row, col)` square address
//! - **Piece**: team + kind, enumerates pseudo-legal moves
//! - **Board**: 8x8 storage without rule knowledge
//! - **Game**: turn order, legality filtering, move execution, verdicts
//!
//! Castling and en passant are not supported.
//!
//! # Example
//!
//! ```
//! use strictly_chess::{Coordinate, Game, Move, Team};
//!
//! let mut game = Game::new();
//! let e2 = Coordinate::new(2, 5);
//! let e4 = Coordinate::new(4, 5);
//!
//! let moves = game.legal_moves(e2).unwrap_or_default();
//! assert!(moves.contains(&Move::new(e2, e4)));
//!
//! game.make_move(Move::new(e2, e4)).unwrap();
//! assert_eq!(game.team_turn(), Team::Black);
//! assert!(!game.is_in_check(Team::Black));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coordinate;
mod game;
mod snapshot;
mod status;
mod types;

pub mod config;
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use action::{InvalidMove, Move};
pub use board::Board;
pub use coordinate::{Coordinate, MAX_INDEX, MIN_INDEX};
pub use types::{Piece, PieceKind, Team};

// Crate-level exports - Game orchestration
pub use game::Game;
pub use rules::RuleSet;
pub use snapshot::GameSnapshot;
pub use status::GameStatus;

// Crate-level exports - Configuration
pub use config::{ConfigError, Placement, ReplayScript};
