//! Perft: counts the legal move tree's leaves to validate the
//! generator and the transition function.

use std::collections::HashMap;

use super::state::Board;

impl Board {
    /// Counts the leaf nodes of the legal move tree at `depth`.
    ///
    /// Transpositions are collapsed through a per-depth cache keyed by
    /// the zobrist key; the cache lives only for this invocation.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        #[cfg(feature = "logging")]
        let start = std::time::Instant::now();

        let mut caches: Vec<HashMap<u64, u64>> = vec![HashMap::new(); depth as usize];
        let nodes = perft_inner(self, depth, &mut caches);

        #[cfg(feature = "logging")]
        log::debug!(
            "perft({depth}) = {nodes} in {:?}, {} cached totals",
            start.elapsed(),
            caches.iter().map(|cache| cache.len()).sum::<usize>()
        );

        nodes
    }

    /// Like [`Board::perft`], but prints each root move with its leaf
    /// count followed by the total.
    pub fn perft_divide(&self, depth: u32) -> u64 {
        if depth == 0 {
            println!("\nNodes searched: 1");
            return 1;
        }
        let mut caches: Vec<HashMap<u64, u64>> = vec![HashMap::new(); depth as usize - 1];
        let mut total = 0;
        for &mv in &self.legal_moves() {
            let nodes = perft_inner(&self.apply(mv), depth - 1, &mut caches);
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("\nNodes searched: {total}");
        total
    }
}

fn perft_inner(board: &Board, depth: u32, caches: &mut [HashMap<u64, u64>]) -> u64 {
    if depth == 0 {
        return 1;
    }
    let slot = depth as usize - 1;
    if let Some(&nodes) = caches[slot].get(&board.zobrist_key()) {
        return nodes;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in &moves {
        nodes += perft_inner(&board.apply(mv), depth - 1, caches);
    }
    caches[slot].insert(board.zobrist_key(), nodes);
    nodes
}
