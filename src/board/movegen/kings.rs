//! King move and castling generation.

use super::super::attack_tables::king_attacks;
use super::super::state::Board;
use super::super::types::{Bitboard, Color, Move, MoveList, Square};
use super::GenMode;

impl Board {
    pub(super) fn gen_king_moves(&self, mode: GenMode, list: &mut MoveList) {
        let us = self.stm;
        let them = us.opponent();
        let ksq = self.king_sq(us);
        let enemy = self.side_occupancy(them);

        let mut targets = king_attacks(ksq) & !self.side_occupancy(us);
        match mode {
            GenMode::Quiescence => targets &= enemy,
            GenMode::NonQuiescence => targets &= !enemy,
            GenMode::AllLegal => {}
        }

        // lift the king off the board so sliders see through its
        // current square when testing the destination
        let occupancy_without_king = self.occupancy() ^ Bitboard::from_square(ksq);
        for to in targets {
            if !self.attackers_of(to, them, occupancy_without_king).is_empty() {
                continue;
            }
            list.push(if enemy.contains(to) {
                Move::capture(ksq, to)
            } else {
                Move::quiet(ksq, to)
            });
        }
    }

    /// Castling moves. Caller guarantees the side to move is not in
    /// check and the mode admits quiet moves.
    pub(super) fn gen_castling_moves(&self, list: &mut MoveList) {
        let us = self.stm;
        let them = us.opponent();
        let rank = if us == Color::White { 0 } else { 7 };
        let king_from = Square::new(rank, 4);
        let occupancy = self.occupancy();

        if self.castling.has(us, true) {
            let f = Square::new(rank, 5);
            let g = Square::new(rank, 6);
            let path = Bitboard::from_square(f) | Bitboard::from_square(g);
            if !occupancy.intersects(path) && !self.is_attacked(f, them) && !self.is_attacked(g, them)
            {
                list.push(Move::castle_kingside(king_from, g));
            }
        }

        if self.castling.has(us, false) {
            let b = Square::new(rank, 1);
            let c = Square::new(rank, 2);
            let d = Square::new(rank, 3);
            let path = Bitboard::from_square(b) | Bitboard::from_square(c) | Bitboard::from_square(d);
            if !occupancy.intersects(path) && !self.is_attacked(d, them) && !self.is_attacked(c, them)
            {
                list.push(Move::castle_queenside(king_from, c));
            }
        }
    }
}
