//! Integration smoke tests against the public API.

use castellan::{Board, BoardHistory, Color, FenError, GenMode, Piece, START_FEN};

#[test]
fn startpos_basics() {
    let board = Board::new();
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.generate_moves(GenMode::Quiescence).len(), 0);
    assert_eq!(board.perft(2), 400);
    assert_eq!(board.to_fen(), START_FEN);
}

#[test]
fn startpos_alias_parses() {
    let mut board = Board::new();
    let consumed = board.set_from_fen("startpos").unwrap();
    assert_eq!(consumed, 1);
    assert_eq!(board, Board::new());
}

#[test]
fn token_counts_reflect_optional_clocks() {
    let mut board = Board::new();
    assert_eq!(
        board.set_from_fen("8/4k3/8/6K1/8/8/1P6/8 w - -").unwrap(),
        4
    );
    assert_eq!(
        board.set_from_fen("8/4k3/8/6K1/8/8/1P6/8 w - - 12").unwrap(),
        5
    );
    assert_eq!(
        board
            .set_from_fen("8/4k3/8/6K1/8/8/1P6/8 w - - 12 34")
            .unwrap(),
        6
    );
    assert_eq!(board.halfmove_clock(), 12);
    assert_eq!(board.fullmove_counter(), 34);
}

#[test]
fn failed_parse_preserves_the_board() {
    let mut board = Board::from_fen("8/4k3/8/6K1/8/8/1P6/8 w - - 0 1").unwrap();
    let before = board.clone();

    let err = board.set_from_fen("8/4k3/8/6K1/8/8/1X6/8 w - -");
    assert_eq!(err, Err(FenError::InvalidPiece { piece: 'X' }));
    assert_eq!(board, before);

    assert!(board.set_from_fen("not a fen at all").is_err());
    assert_eq!(board, before);

    // missing kings are rejected
    assert!(matches!(
        board.set_from_fen("8/8/8/8/8/8/1P6/8 w - -"),
        Err(FenError::InvalidKingCount { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn play_a_short_game_through_history() {
    let mut history = BoardHistory::new(Board::new());
    for s in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        let mv = history.current().move_from_string(s).expect("legal move");
        history.make_move(mv);
    }
    assert_eq!(history.len(), 6);
    assert_eq!(history.current().side_to_move(), Color::Black);
    assert_eq!(history.current().fullmove_counter(), 3);
    assert_eq!(history.last_move().to_string(), "f1b5");

    history.unmake_move();
    history.unmake_move();
    assert_eq!(history.current().fullmove_counter(), 2);
}

#[test]
fn polyglot_key_of_the_start_position() {
    assert_eq!(Board::new().polyglot_key(), 0x463b96181691fc9c);
}

#[test]
fn promotion_moves_report_their_piece() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = board.move_from_string("a7a8n").unwrap();
    assert!(mv.is_promotion());
    assert_eq!(mv.promotion(), Some(Piece::Knight));
    let next = board.apply(mv);
    assert_eq!(next.pieces_of(Color::White, Piece::Knight).popcount(), 1);
}

#[test]
fn fifty_move_rule_flag() {
    let mut board = Board::new();
    board
        .set_from_fen("8/4k3/8/6K1/8/8/1R6/8 w - - 99 80")
        .unwrap();
    assert!(!board.is_fifty_move_draw());
    let mv = board.move_from_string("b2b3").unwrap();
    assert!(board.apply(mv).is_fifty_move_draw());
}

#[cfg(feature = "serde")]
#[test]
fn value_types_serialize() {
    use castellan::{Move, Square};

    let sq: Square = "e4".parse().unwrap();
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);

    let board = Board::new();
    let mv = board.move_from_string("e2e4").unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
}
