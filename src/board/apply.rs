//! The position transition: applying a move produces the next board.

use super::state::{Board, EP_NONE};
use super::types::{CastlingRights, Color, Move, Piece, Square};
use super::zobrist;

/// Start and destination square of the rook in a castling move.
pub(crate) fn castle_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    let rank = if color == Color::White { 0 } else { 7 };
    if kingside {
        (Square::new(rank, 7), Square::new(rank, 5))
    } else {
        (Square::new(rank, 0), Square::new(rank, 3))
    }
}

impl Board {
    /// Applies a legal move, producing the next position with all
    /// bitboards, the mailbox, castling rights, the en-passant file,
    /// clocks, checkers, pins, and both hashes updated together.
    ///
    /// The move must have come from this position's move generator;
    /// applying anything else leaves the result unspecified.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make(mv);
        next
    }

    /// The null-move transition: same placement, other side to move,
    /// en passant cleared. Used by search drivers; pairs with a
    /// history pop like any other move.
    #[must_use]
    pub fn apply_null(&self) -> Board {
        let mut next = self.clone();
        next.set_ep_file(EP_NONE);
        next.halfmove_clock += 1;
        if next.stm == Color::Black {
            next.fullmove_counter += 1;
        }
        next.stm = next.stm.opponent();
        next.key ^= zobrist::TURN_KEY;
        next.pawn_key ^= zobrist::TURN_KEY;
        next.recompute_checkers_and_pins();
        next
    }

    fn make(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let us = self.stm;
        let them = us.opponent();
        let (_, piece) = self.mailbox[from.index()].expect("apply: source square is empty");

        if mv.is_capture() {
            let cap_sq = if mv.is_en_passant() {
                // the captured pawn sits beside the capturer, one rank
                // behind the destination
                Square::new(from.rank(), to.file())
            } else {
                to
            };
            let (cap_color, cap_piece) =
                self.mailbox[cap_sq.index()].expect("apply: capture of an empty square");
            debug_assert_eq!(cap_color, them);
            self.remove_piece(cap_color, cap_piece, cap_sq);
        }

        self.remove_piece(us, piece, from);
        self.put_piece(us, mv.promotion().unwrap_or(piece), to);

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(us, mv.is_castle_kingside());
            self.remove_piece(us, Piece::Rook, rook_from);
            self.put_piece(us, Piece::Rook, rook_to);
        }

        let rights = self.castling_rights_after(mv, piece);
        self.set_castling_rights(rights);

        let new_ep = if mv.is_double_pawn_push() {
            from.file() as u8
        } else {
            EP_NONE
        };
        self.set_ep_file(new_ep);

        if piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_counter += 1;
        }

        self.stm = them;
        self.key ^= zobrist::TURN_KEY;
        self.pawn_key ^= zobrist::TURN_KEY;

        self.recompute_checkers_and_pins();
    }

    /// The zobrist key [`Board::apply`] would produce, without
    /// materializing the next position. Useful for hash prefetching.
    #[must_use]
    pub fn key_after(&self, mv: Move) -> u64 {
        let from = mv.from();
        let to = mv.to();
        let us = self.stm;
        let them = us.opponent();
        let (_, piece) = self.mailbox[from.index()].expect("key_after: source square is empty");

        let mut key = self.key;

        if mv.is_capture() {
            let cap_sq = if mv.is_en_passant() {
                Square::new(from.rank(), to.file())
            } else {
                to
            };
            let (_, cap_piece) =
                self.mailbox[cap_sq.index()].expect("key_after: capture of an empty square");
            key ^= zobrist::piece_key(them, cap_piece, cap_sq);
        }

        key ^= zobrist::piece_key(us, piece, from);
        key ^= zobrist::piece_key(us, mv.promotion().unwrap_or(piece), to);

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(us, mv.is_castle_kingside());
            key ^= zobrist::piece_key(us, Piece::Rook, rook_from);
            key ^= zobrist::piece_key(us, Piece::Rook, rook_to);
        }

        let mut changed = self.castling.as_u8() ^ self.castling_rights_after(mv, piece).as_u8();
        while changed != 0 {
            key ^= zobrist::castle_key(changed.trailing_zeros() as usize);
            changed &= changed - 1;
        }

        key ^= zobrist::ep_key(self.ep_file);
        if mv.is_double_pawn_push() {
            key ^= zobrist::ep_key(from.file() as u8);
        }

        key ^ zobrist::TURN_KEY
    }

    /// Castling rights once `mv` (moving `piece`) has been played: a
    /// king move drops both of the mover's rights, and any move from
    /// or to a rook's starting corner drops that corner's right.
    fn castling_rights_after(&self, mv: Move, piece: Piece) -> CastlingRights {
        let mut rights = self.castling;
        if rights.as_u8() == 0 {
            return rights;
        }
        if piece == Piece::King {
            rights.remove_both(self.stm);
        }
        const CORNERS: [(usize, Color, bool); 4] = [
            (7, Color::White, true),   // h1
            (0, Color::White, false),  // a1
            (63, Color::Black, true),  // h8
            (56, Color::Black, false), // a8
        ];
        for (corner, color, kingside) in CORNERS {
            if mv.from().index() == corner || mv.to().index() == corner {
                rights.remove(color, kingside);
            }
        }
        rights
    }
}
