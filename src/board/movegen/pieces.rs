//! Knight, bishop, rook, and queen move generation.

use super::super::attack_tables::{bishop_attacks, knight_attacks, line, queen_attacks, rook_attacks};
use super::super::state::Board;
use super::super::types::{Bitboard, Move, MoveList, Piece};
use super::GenMode;

impl Board {
    pub(super) fn gen_piece_moves(&self, mode: GenMode, valid_dests: Bitboard, list: &mut MoveList) {
        let us = self.stm;
        let them = us.opponent();
        let friendly = self.side_occupancy(us);
        let enemy = self.side_occupancy(them);
        let occupancy = self.occupancy();
        let ksq = self.king_sq(us);

        for piece in [Piece::Queen, Piece::Bishop, Piece::Knight, Piece::Rook] {
            for from in self.pieces_of(us, piece) {
                let attacks = match piece {
                    Piece::Knight => knight_attacks(from),
                    Piece::Bishop => bishop_attacks(from, occupancy),
                    Piece::Rook => rook_attacks(from, occupancy),
                    Piece::Queen => queen_attacks(from, occupancy),
                    Piece::Pawn | Piece::King => unreachable!("generated elsewhere"),
                };

                let mut targets = attacks & !friendly & valid_dests;
                match mode {
                    GenMode::Quiescence => targets &= enemy,
                    GenMode::NonQuiescence => targets &= !enemy,
                    GenMode::AllLegal => {}
                }
                if self.pinned.contains(from) {
                    targets &= line(ksq, from);
                }

                for to in targets {
                    list.push(if enemy.contains(to) {
                        Move::capture(from, to)
                    } else {
                        Move::quiet(from, to)
                    });
                }
            }
        }
    }
}
