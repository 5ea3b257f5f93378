//! Precomputed attack tables.
//!
//! Leaper tables (knight, king, pawn) are indexed by square; slider
//! attacks go through fancy magic bitboards. All tables are built once
//! on first use and immutable afterwards, so they are freely shareable
//! across threads.

mod magics;
mod tables;

use super::types::{Bitboard, Color, Square};

/// Squares a knight on `sq` attacks.
#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(tables::knight_moves(sq.index()))
}

/// Squares a king on `sq` attacks.
#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(tables::king_moves(sq.index()))
}

/// Squares a pawn of `side` on `sq` attacks (diagonals, not pushes).
#[inline]
pub(crate) fn pawn_attacks(side: Color, sq: Square) -> Bitboard {
    Bitboard(tables::pawn_attack_map(side.index(), sq.index()))
}

/// Squares a bishop on `sq` attacks through `occupancy`.
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(magics::bishop_attacks_raw(sq.index(), occupancy.0))
}

/// Squares a rook on `sq` attacks through `occupancy`.
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(magics::rook_attacks_raw(sq.index(), occupancy.0))
}

/// Squares a queen on `sq` attacks through `occupancy`.
#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

/// The squares strictly between `a` and `b` (when colinear) plus `b`
/// itself; `between(a, a)` is `{a}`.
#[inline]
pub(crate) fn between(a: Square, b: Square) -> Bitboard {
    Bitboard(tables::between_raw(a.index(), b.index()))
}

/// The full rank, file, or diagonal through `a` and `b`, or empty when
/// they are not colinear.
#[inline]
pub(crate) fn line(a: Square, b: Square) -> Bitboard {
    Bitboard(tables::line_raw(a.index(), b.index()))
}
