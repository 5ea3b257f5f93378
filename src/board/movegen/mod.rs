//! Fully legal move generation.
//!
//! Every emitted move is already legal; there is no make/try/unmake
//! round trip. King moves are filtered by re-testing attackers with
//! the king lifted off the occupancy, everything else is constrained
//! up front by the checker mask and the pin rays, and en passant gets
//! an explicit post-capture verification.

mod kings;
mod pawns;
mod pieces;

use super::attack_tables::between;
use super::state::Board;
use super::types::{Bitboard, MoveList};

/// What subset of the legal moves to generate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenMode {
    /// Every legal move.
    AllLegal,
    /// Moves that "make noise": captures, plus queen and knight
    /// promotions.
    Quiescence,
    /// The complement of [`GenMode::Quiescence`]: quiet moves and
    /// rook/bishop underpromotions.
    NonQuiescence,
}

impl Board {
    /// Generates the legal moves for the side to move under `mode`.
    ///
    /// The output order is deterministic for a given position; callers
    /// impose their own ordering on top.
    #[must_use]
    pub fn generate_moves(&self, mode: GenMode) -> MoveList {
        let mut list = MoveList::new();

        self.gen_king_moves(mode, &mut list);

        // with two checkers only the king can move
        if self.checkers.popcount() >= 2 {
            return list;
        }

        if mode != GenMode::Quiescence && self.checkers.is_empty() {
            self.gen_castling_moves(&mut list);
        }

        // in check, non-king moves must capture the checker or block
        let valid_dests = if self.in_check() {
            between(self.king_sq(self.stm), self.checkers.lsb())
        } else {
            Bitboard::ALL
        };

        self.gen_piece_moves(mode, valid_dests, &mut list);
        self.gen_pawn_moves(mode, valid_dests, &mut list);

        list
    }

    /// All legal moves; shorthand for [`GenMode::AllLegal`].
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.generate_moves(GenMode::AllLegal)
    }
}
