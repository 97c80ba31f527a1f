//! Scenario tests for full games and hand-built positions.

use strictly_chess::{Board, Coordinate, Game, InvalidMove, Move, Piece, PieceKind, RuleSet, Team};

fn sq(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn play(game: &mut Game, moves: &[((i32, i32), (i32, i32))]) {
    for &((fr, fc), (tr, tc)) in moves {
        let mv = Move::new(sq(fr, fc), sq(tr, tc));
        game.make_move(mv)
            .unwrap_or_else(|e| panic!("{mv} should be legal: {e}"));
    }
}

fn game_with(pieces: &[((i32, i32), Team, PieceKind)]) -> Game {
    let mut board = Board::new();
    for &((row, col), team, kind) in pieces {
        board.place(sq(row, col), Piece::new(team, kind));
    }
    let mut game = Game::new();
    game.set_board(board);
    game
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ((2, 6), (3, 6)), // f3
            ((7, 5), (5, 5)), // e5
            ((2, 7), (4, 7)), // g4
            ((8, 4), (4, 8)), // Qh4#
        ],
    );

    assert!(game.is_in_check(Team::White));
    assert!(game.is_in_checkmate(Team::White));
    assert!(!game.is_in_stalemate(Team::White));
    assert!(!game.is_in_check(Team::Black));
    assert_eq!(
        game.status(),
        strictly_chess::GameStatus::Checkmate(Team::White)
    );
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ((2, 5), (4, 5)), // e4
            ((7, 5), (5, 5)), // e5
            ((1, 6), (4, 3)), // Bc4
            ((8, 2), (6, 3)), // Nc6
            ((1, 4), (5, 8)), // Qh5
            ((8, 7), (6, 6)), // Nf6
            ((5, 8), (7, 6)), // Qxf7#
        ],
    );

    assert!(game.is_in_check(Team::Black));
    assert!(game.is_in_checkmate(Team::Black));
    assert_eq!(game.board().pieces_of(Team::Black).count(), 15);
}

#[test]
fn test_promotion_offers_four_kinds() {
    let mut game = game_with(&[
        ((7, 4), Team::White, PieceKind::Pawn),
        ((1, 1), Team::White, PieceKind::King),
        ((3, 8), Team::Black, PieceKind::King),
    ]);
    let from = sq(7, 4);
    let to = sq(8, 4);

    let moves = game.legal_moves(from).unwrap_or_default();
    assert_eq!(moves.len(), 4);
    for kind in [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ] {
        assert!(moves.contains(&Move::promoting(from, to, kind)));
    }
    assert!(moves.iter().all(|m| m.from() == from && m.to() == to));
}

#[test]
fn test_lone_pawn_promotes_under_both_rule_sets() {
    let pieces = [((7, 4), Team::White, PieceKind::Pawn)];

    let mut default_rules = game_with(&pieces);
    let before = default_rules.clone();
    let moves = default_rules.legal_moves(sq(7, 4)).unwrap_or_default();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.promotion().is_some()));
    assert_eq!(default_rules, before);

    let mut standard = Game::with_rules(RuleSet::standard());
    standard.set_board(default_rules.board().clone());
    assert_eq!(standard.legal_moves(sq(7, 4)).map(|m| m.len()), Some(4));

    default_rules
        .make_move(Move::promoting(sq(7, 4), sq(8, 4), PieceKind::Bishop))
        .unwrap();
    assert_eq!(
        default_rules.board().get(sq(8, 4)),
        Some(Piece::new(Team::White, PieceKind::Bishop))
    );
}

#[test]
fn test_promotion_rejects_plain_and_king_moves() {
    let mut game = game_with(&[
        ((7, 4), Team::White, PieceKind::Pawn),
        ((1, 1), Team::White, PieceKind::King),
        ((3, 8), Team::Black, PieceKind::King),
    ]);
    let before = game.clone();

    let plain = Move::new(sq(7, 4), sq(8, 4));
    assert_eq!(game.make_move(plain), Err(InvalidMove::NotLegal(plain)));
    let king = Move::promoting(sq(7, 4), sq(8, 4), PieceKind::King);
    assert_eq!(game.make_move(king), Err(InvalidMove::NotLegal(king)));
    assert_eq!(game, before);

    game.make_move(Move::promoting(sq(7, 4), sq(8, 4), PieceKind::Queen))
        .unwrap();
    assert_eq!(
        game.board().get(sq(8, 4)),
        Some(Piece::new(Team::White, PieceKind::Queen))
    );
}

#[test]
fn test_blocked_rook() {
    let mut game = game_with(&[
        ((1, 1), Team::White, PieceKind::Rook),
        ((3, 1), Team::White, PieceKind::Pawn),
        ((1, 8), Team::White, PieceKind::King),
        ((8, 5), Team::Black, PieceKind::King),
    ]);

    let moves = game.legal_moves(sq(1, 1)).unwrap_or_default();
    let on_file: Vec<_> = moves
        .iter()
        .map(|m| m.to())
        .filter(|to| to.col() == Some(1))
        .collect();
    assert_eq!(on_file, vec![sq(2, 1)]);
    assert!(moves.iter().all(|m| m.to() != sq(3, 1)));
    // Along the rank the rook reaches b1..g1 and stops before its king.
    assert_eq!(moves.len(), 1 + 6);
}

#[test]
fn test_illegal_moves_leave_game_unchanged() {
    let mut game = Game::new();
    let before = game.clone();

    let empty = Move::new(sq(4, 4), sq(5, 4));
    assert_eq!(game.make_move(empty), Err(InvalidMove::EmptySquare(sq(4, 4))));

    let opposing = Move::new(sq(7, 4), sq(5, 4));
    assert!(matches!(
        game.make_move(opposing),
        Err(InvalidMove::OutOfTurn { .. })
    ));

    let unreachable = Move::new(sq(1, 4), sq(4, 4));
    assert_eq!(
        game.make_move(unreachable),
        Err(InvalidMove::NotLegal(unreachable))
    );

    let off_board = Move::new(sq(2, 1), sq(9, 1));
    assert_eq!(
        game.make_move(off_board),
        Err(InvalidMove::NotLegal(off_board))
    );

    let invalid_origin = Move::new(sq(0, 1), sq(3, 1));
    assert_eq!(
        game.make_move(invalid_origin),
        Err(InvalidMove::EmptySquare(Coordinate::INVALID))
    );

    assert_eq!(game, before);
    assert_eq!(game.team_turn(), Team::White);
}

#[test]
fn test_move_leaving_king_in_check_is_rejected() {
    let mut game = game_with(&[
        ((1, 5), Team::White, PieceKind::King),
        ((2, 5), Team::White, PieceKind::Bishop),
        ((8, 5), Team::Black, PieceKind::Rook),
        ((8, 1), Team::Black, PieceKind::King),
    ]);
    let before = game.clone();

    let pinned = Move::new(sq(2, 5), sq(3, 4));
    assert_eq!(game.make_move(pinned), Err(InvalidMove::NotLegal(pinned)));
    assert_eq!(game, before);
}

#[test]
fn test_black_moves_after_white() {
    let mut game = Game::new();
    let reply = Move::new(sq(7, 5), sq(5, 5));
    assert!(game.make_move(reply).is_err());
    play(&mut game, &[((2, 5), (4, 5))]);
    assert!(game.make_move(reply).is_ok());
    assert_eq!(game.team_turn(), Team::White);
}

#[test]
fn test_set_team_turn_lets_black_start() {
    let mut game = Game::new();
    game.set_team_turn(Team::Black);
    play(&mut game, &[((8, 2), (6, 3))]);
    assert_eq!(game.team_turn(), Team::White);
}

#[test]
fn test_legal_moves_answers_for_either_team() {
    let mut game = Game::new();
    assert_eq!(game.legal_moves(sq(7, 1)).map(|m| m.len()), Some(2));
    assert_eq!(game.legal_moves(sq(8, 2)).map(|m| m.len()), Some(2));
    assert_eq!(game.legal_moves(sq(1, 1)), Some(Vec::new()));
    assert_eq!(game.legal_moves(sq(5, 5)), None);
}
