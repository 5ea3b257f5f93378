//! Pawn move generation: pushes, captures, promotions, en passant.

use super::super::attack_tables::{bishop_attacks, knight_attacks, line, pawn_attacks, rook_attacks};
use super::super::state::{Board, EP_NONE};
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use super::super::zobrist;
use super::GenMode;

/// Emits the promotion choices for one destination, filtered by mode:
/// queen and knight count as noisy, rook and bishop as quiet.
fn push_promotions(list: &mut MoveList, mode: GenMode, from: Square, to: Square, capture: bool) {
    if mode != GenMode::NonQuiescence {
        list.push(Move::new_promotion(from, to, Piece::Queen, capture));
        list.push(Move::new_promotion(from, to, Piece::Knight, capture));
    }
    if mode != GenMode::Quiescence {
        list.push(Move::new_promotion(from, to, Piece::Rook, capture));
        list.push(Move::new_promotion(from, to, Piece::Bishop, capture));
    }
}

impl Board {
    pub(super) fn gen_pawn_moves(&self, mode: GenMode, valid_dests: Bitboard, list: &mut MoveList) {
        let us = self.stm;
        let them = us.opponent();
        let pawns = self.pieces_of(us, Piece::Pawn);
        if pawns.is_empty() {
            return;
        }

        let occupancy = self.occupancy();
        let enemy = self.side_occupancy(them);
        let ksq = self.king_sq(us);
        let pinned_pawns = pawns & self.pinned;
        let unpinned = pawns ^ pinned_pawns;
        let white = us == Color::White;
        let ahead: i32 = if white { 1 } else { -1 };
        let back_rank = Bitboard::rank_mask(if white { 7 } else { 0 });
        let push_one = |bb: Bitboard| if white { bb << 8 } else { bb >> 8 };
        let square_behind =
            |to: Square| Square::new((to.rank() as i32 - ahead) as usize, to.file());

        // Pushes. A pinned pawn may advance only when the pin ray is
        // its own file, which is exactly the king's file.
        let advanceable = unpinned | (pinned_pawns & Bitboard::file_mask(ksq.file()));
        let single = push_one(advanceable) & !occupancy;

        if mode != GenMode::Quiescence {
            let double_rank = Bitboard::rank_mask(if white { 3 } else { 4 });
            let double = push_one(single) & !occupancy & valid_dests & double_rank;
            for to in double {
                let from = Square::new((to.rank() as i32 - 2 * ahead) as usize, to.file());
                list.push(Move::double_pawn_push(from, to));
            }
        }

        let single = single & valid_dests;
        let promoting = single & back_rank;
        for to in promoting {
            push_promotions(list, mode, square_behind(to), to, false);
        }
        if mode != GenMode::Quiescence {
            for to in single ^ promoting {
                list.push(Move::quiet(square_behind(to), to));
            }
        }

        // Diagonal captures, one pass per direction. A pinned pawn may
        // capture only along the diagonal through its king.
        for file_delta in [-1i32, 1] {
            let pin_ray = match ksq.offset(ahead, file_delta) {
                Some(diag) => line(ksq, diag),
                None => Bitboard::EMPTY,
            };
            let edge = if file_delta < 0 {
                Bitboard::FILE_A
            } else {
                Bitboard::FILE_H
            };
            let eligible = (unpinned | (pinned_pawns & pin_ray)) & !edge;
            let shifted = if white {
                eligible << (8 + file_delta) as u32
            } else {
                eligible >> (8 - file_delta) as u32
            };
            let targets = shifted & enemy & valid_dests;
            for to in targets {
                let from = Square::new(
                    (to.rank() as i32 - ahead) as usize,
                    (to.file() as i32 - file_delta) as usize,
                );
                if back_rank.contains(to) {
                    push_promotions(list, mode, from, to, true);
                } else if mode != GenMode::NonQuiescence {
                    list.push(Move::capture(from, to));
                }
            }
        }

        if self.ep_file != EP_NONE && mode != GenMode::NonQuiescence {
            self.gen_en_passant(list);
        }
    }

    /// En passant needs its own legality check: the capture vacates
    /// two squares on one rank, which is what the classic horizontal
    /// pin exploits. The check rebuilds the post-capture occupancy and
    /// verifies the king is not attacked afterwards.
    fn gen_en_passant(&self, list: &mut MoveList) {
        let us = self.stm;
        let them = us.opponent();
        let white = us == Color::White;
        let file = self.ep_file as usize;

        let target = Square::new(if white { 5 } else { 2 }, file);
        let captured = Square::new(if white { 4 } else { 3 }, file);
        let captured_bit = Bitboard::from_square(captured);
        let ksq = self.king_sq(us);
        let occupancy = self.occupancy();
        let queens = self.pieces_of(them, Piece::Queen);

        let candidates =
            self.pieces_of(us, Piece::Pawn) & zobrist::ep_capture_mask(us, self.ep_file);
        for from in candidates {
            let post_occupancy = (occupancy
                ^ Bitboard::from_square(from)
                ^ captured_bit)
                | Bitboard::from_square(target);

            let bishop_threats =
                bishop_attacks(ksq, post_occupancy) & (self.pieces_of(them, Piece::Bishop) | queens);
            let rook_threats =
                rook_attacks(ksq, post_occupancy) & (self.pieces_of(them, Piece::Rook) | queens);
            let slider_check = !bishop_threats.is_empty() || !rook_threats.is_empty();
            // a knight check, or a pawn check the capture does not
            // remove, cannot be answered by en passant
            let knight_check =
                knight_attacks(ksq).intersects(self.pieces_of(them, Piece::Knight));
            let pawn_check = pawn_attacks(us, ksq)
                .intersects(self.pieces_of(them, Piece::Pawn) ^ captured_bit);

            if !slider_check && !knight_check && !pawn_check {
                list.push(Move::en_passant(from, target));
            }
        }
    }
}
