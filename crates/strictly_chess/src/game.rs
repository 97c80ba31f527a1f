//! Turn order and move legality.
//!
//! [`Game`] owns a [`Board`] and the team to move. It turns the piece-level
//! move patterns from [`rules`](crate::rules) into legal moves and applies
//! them.

use crate::action::{InvalidMove, Move};
use crate::board::Board;
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::coordinate::Coordinate;
use crate::rules::{self, RuleSet};
use crate::status::GameStatus;
use crate::types::{Piece, Team};
use tracing::{debug, error, instrument};

/// A chess game: one board and the team to move.
///
/// Starts from the standard position with White to move. The engine keeps
/// no move history and never ends the game itself; checkmate and stalemate
/// are queries.
///
/// Queries that probe legality take `&mut self`. They apply candidate moves
/// to the board and revert them before returning, so the visible state is
/// unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Team,
    pub(crate) rules: RuleSet,
}

impl Game {
    /// Creates a game in the starting position, White to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// Creates a game in the starting position with the given rules.
    #[instrument]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            board: Board::standard(),
            to_move: Team::White,
            rules,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board, e.g. with a position set up by an outer layer.
    #[instrument(skip(self, board))]
    pub fn set_board(&mut self, board: Board) {
        debug!(pieces = board.occupied().count(), "Board replaced");
        self.board = board;
    }

    /// Returns the team to move.
    pub fn team_turn(&self) -> Team {
        self.to_move
    }

    /// Sets the team to move.
    #[instrument(skip(self))]
    pub fn set_team_turn(&mut self, team: Team) {
        self.to_move = team;
    }

    /// Returns the active rule switches.
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Legal moves of the piece on `coord`, or `None` if there is no piece.
    ///
    /// Works for either team regardless of whose turn it is.
    #[instrument(skip(self))]
    pub fn legal_moves(&mut self, coord: Coordinate) -> Option<Vec<Move>> {
        rules::legal_moves(&mut self.board, coord, self.rules)
    }

    /// Plays `mv` for the team to move.
    ///
    /// The move must start on a piece of the team to move and be one of that
    /// piece's legal moves. On success the piece (or its promotion) lands on
    /// the destination and the turn passes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the move is refused. Board and turn are
    /// then left as they were.
    #[instrument(skip(self, mv), fields(to_move = %self.to_move, mv = %mv))]
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let piece = LegalMove::check(&mv, self)?;

        let before = cfg!(debug_assertions).then(|| self.clone());

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(piece.team(), kind),
            None => piece,
        };
        self.board.place(mv.to(), placed);
        self.board.remove(mv.from());
        self.to_move = self.to_move.opponent();

        if let Some(before) = before
            && let Err(violations) = MoveContract::post(&before, self, &mv)
        {
            for v in &violations {
                error!(violation = %v.description, "Move postcondition failed");
            }
            debug_assert!(violations.is_empty(), "Move postcondition failed");
        }

        debug!(placed = %placed, next = %self.to_move, "Move applied");
        Ok(())
    }

    /// Returns true if `team`'s king is attacked.
    #[instrument(skip(self))]
    pub fn is_in_check(&self, team: Team) -> bool {
        rules::is_in_check(&self.board, team)
    }

    /// Returns true if `team` is in check and no move gets it out.
    #[instrument(skip(self))]
    pub fn is_in_checkmate(&mut self, team: Team) -> bool {
        rules::is_in_checkmate(&mut self.board, team)
    }

    /// Returns true if `team` is not in check but has no move that stays out of it.
    #[instrument(skip(self))]
    pub fn is_in_stalemate(&mut self, team: Team) -> bool {
        rules::is_in_stalemate(&mut self.board, team)
    }

    /// Verdict for the team to move.
    #[instrument(skip(self))]
    pub fn status(&mut self) -> GameStatus {
        let team = self.to_move;
        let in_check = rules::is_in_check(&self.board, team);
        let stuck = rules::has_no_safe_move(&mut self.board, team);
        match (in_check, stuck) {
            (true, true) => GameStatus::Checkmate(team),
            (true, false) => GameStatus::Check(team),
            (false, true) => GameStatus::Stalemate(team),
            (false, false) => GameStatus::Ongoing,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
