//! The board history: an ordered stack of positions and the moves
//! that produced them, used for undo and repetition detection.

use super::state::Board;
use super::types::Move;

/// Upper bound on the number of positions a single game can reach;
/// sizes the history's initial allocation.
pub(crate) const MAX_GAME_MOVES: usize = 1024;

/// A stack of `(Board, Move)` pairs. The first entry is the root
/// position paired with the null move; every later entry holds the
/// position produced by applying its move to the previous entry.
///
/// Undo is a pop, not a reverse transition: popping restores the
/// previous position bit for bit, hashes and checker masks included.
pub struct BoardHistory {
    entries: Vec<(Board, Move)>,
}

impl BoardHistory {
    /// A history rooted at `initial`.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        let mut entries = Vec::with_capacity(MAX_GAME_MOVES);
        entries.push((initial, Move::null()));
        BoardHistory { entries }
    }

    /// The position on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.entries.last().expect("history always holds the root").0
    }

    /// The move that produced the current position; the null move at
    /// the root.
    #[must_use]
    pub fn last_move(&self) -> Move {
        self.entries.last().expect("history always holds the root").1
    }

    /// Number of positions held, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `idx`-th entry from the bottom of the stack.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<(&Board, Move)> {
        self.entries.get(idx).map(|(board, mv)| (board, *mv))
    }

    /// Applies `mv` to the current position and pushes the result.
    pub fn make_move(&mut self, mv: Move) -> &Board {
        debug_assert!(self.entries.len() < MAX_GAME_MOVES);
        let next = self.current().apply(mv);
        self.entries.push((next, mv));
        self.current()
    }

    /// Pushes the null-move transition of the current position.
    pub fn make_null_move(&mut self) -> &Board {
        let next = self.current().apply_null();
        self.entries.push((next, Move::null()));
        self.current()
    }

    /// Pops the most recent position, restoring its predecessor.
    /// Returns `None` at the root.
    pub fn unmake_move(&mut self) -> Option<(Board, Move)> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Drops everything above the root position.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }

    /// True when the current position has occurred at least three
    /// times. Only positions within the current halfmove-clock window
    /// are considered; an irreversible move makes earlier repeats
    /// unreachable.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.current();
        let key = current.zobrist_key();
        let window = current.halfmove_clock() as usize;
        let len = self.entries.len();
        let start = len.saturating_sub(window + 1);
        let mut count = 1;
        for (board, _) in &self.entries[start..len - 1] {
            if board.zobrist_key() == key {
                count += 1;
            }
        }
        count >= 3
    }
}
