//! Unit test suites for the board core.

mod proptest;

use super::Board;

/// Asserts the structural invariants: the piece bitboards, the side
/// bitboards, and the mailbox must describe the same occupancy, and
/// each side must have exactly one king.
pub(crate) fn assert_consistent(board: &Board) {
    use super::{Bitboard, Color, Piece, Square};

    let piece_union = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ]
    .iter()
    .fold(Bitboard::EMPTY, |acc, &p| acc | board.pieces(p));
    let side_union = board.side_occupancy(Color::White) | board.side_occupancy(Color::Black);
    assert_eq!(piece_union, side_union);
    assert_eq!(side_union, board.occupancy());

    for idx in 0..64 {
        let sq = Square::from_index(idx);
        match board.piece_at(sq) {
            Some((color, piece)) => {
                assert!(board.pieces_of(color, piece).contains(sq), "mailbox vs bitboards at {sq}");
            }
            None => assert!(!board.occupancy().contains(sq), "ghost occupancy at {sq}"),
        }
    }

    for color in [Color::White, Color::Black] {
        assert_eq!(board.pieces_of(color, Piece::King).popcount(), 1);
    }

    let (key, pawn_key) = board.recompute_keys();
    assert_eq!(board.zobrist_key(), key, "incremental zobrist key drifted");
    assert_eq!(board.pawn_hash(), pawn_key, "incremental pawn key drifted");
}
