//! Property-based tests over random playouts.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::assert_consistent;
use crate::board::{Board, BoardHistory, GenMode};

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Plays up to `plies` random legal moves from the start position.
fn random_playout(seed: u64, plies: usize) -> BoardHistory {
    let mut history = BoardHistory::new(Board::new());
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = history.current().legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        history.make_move(mv);
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Applying moves and popping them all restores the root bit for
    /// bit: hash, checkers, pins, clocks included.
    #[test]
    fn prop_apply_pop_round_trip(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut history = random_playout(seed, plies);
        let root = history.get(0).unwrap().0.clone();
        while history.unmake_move().is_some() {}
        prop_assert_eq!(history.current(), &root);
    }

    /// The incremental keys always equal the closed-form XOR, and the
    /// bitboard/mailbox views stay in agreement.
    #[test]
    fn prop_structural_invariants_hold(seed in seed_strategy(), plies in move_count_strategy()) {
        let history = random_playout(seed, plies);
        assert_consistent(history.current());
    }

    /// Every generated move is legal: after applying it, the mover's
    /// king is not attacked.
    #[test]
    fn prop_generated_moves_are_legal(seed in seed_strategy(), plies in move_count_strategy()) {
        let history = random_playout(seed, plies);
        let board = history.current();
        let us = board.side_to_move();
        for &mv in &board.legal_moves() {
            let next = board.apply(mv);
            let ksq = next.king_sq(us);
            let attackers = next.attackers_of(ksq, us.opponent(), next.occupancy());
            prop_assert!(attackers.is_empty(), "{:?} leaves the king attacked", mv);
        }
    }

    /// `key_after` predicts the applied position's key for every legal
    /// move.
    #[test]
    fn prop_key_after_agrees(seed in seed_strategy(), plies in move_count_strategy()) {
        let history = random_playout(seed, plies);
        let board = history.current();
        for &mv in &board.legal_moves() {
            prop_assert_eq!(board.key_after(mv), board.apply(mv).zobrist_key());
        }
    }

    /// The quiescence and non-quiescence modes partition the legal
    /// moves.
    #[test]
    fn prop_modes_partition(seed in seed_strategy(), plies in move_count_strategy()) {
        use std::collections::HashSet;

        let history = random_playout(seed, plies);
        let board = history.current();
        let all: HashSet<u16> =
            board.generate_moves(GenMode::AllLegal).iter().map(|m| m.as_u16()).collect();
        let noisy: HashSet<u16> =
            board.generate_moves(GenMode::Quiescence).iter().map(|m| m.as_u16()).collect();
        let quiet: HashSet<u16> =
            board.generate_moves(GenMode::NonQuiescence).iter().map(|m| m.as_u16()).collect();

        prop_assert!(noisy.is_disjoint(&quiet));
        let union: HashSet<u16> = noisy.union(&quiet).copied().collect();
        prop_assert_eq!(union, all);
    }

    /// FEN output parses back to the identical position.
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), plies in move_count_strategy()) {
        let history = random_playout(seed, plies);
        let board = history.current();
        let restored = Board::from_fen(&board.to_fen()).unwrap();
        prop_assert_eq!(board, &restored);
    }
}
