//! Precomputed leaper attack tables and the between/line tables.

use once_cell::sync::Lazy;

static KNIGHT_MOVES: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    leaper_table(&deltas)
});

static KING_MOVES: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    leaper_table(&deltas)
});

/// `[side][square]` squares a pawn of `side` on `square` attacks.
static PAWN_ATTACK_MAPS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut maps = [[0u64; 64]; 2];
    for sq in 0..64 {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        for (side, dr) in [(0usize, 1i32), (1, -1)] {
            let mut mask = 0u64;
            let nr = rank + dr;
            if (0..8).contains(&nr) {
                for df in [-1, 1] {
                    let nf = file + df;
                    if (0..8).contains(&nf) {
                        mask |= 1u64 << (nr * 8 + nf);
                    }
                }
            }
            maps[side][sq] = mask;
        }
    }
    maps
});

fn leaper_table(deltas: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let (nr, nf) = (rank + dr, file + df);
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    table
}

fn colinear_step(a: usize, b: usize) -> Option<(i32, i32)> {
    let rank_diff = (b / 8) as i32 - (a / 8) as i32;
    let file_diff = (b % 8) as i32 - (a % 8) as i32;
    if rank_diff == 0 && file_diff == 0 {
        return None;
    }
    if rank_diff == 0 || file_diff == 0 || rank_diff.abs() == file_diff.abs() {
        Some((rank_diff.signum(), file_diff.signum()))
    } else {
        None
    }
}

/// `BETWEEN[a][b]`: the squares strictly between `a` and `b` when they
/// share a rank, file, or diagonal, plus `b` itself; `{b}` alone when
/// they do not. `BETWEEN[a][a] = {a}`. Intersecting with this mask
/// covers both "capture the checker" and "interpose" in one step.
static BETWEEN: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for a in 0..64 {
        for b in 0..64 {
            let mut mask = 1u64 << b;
            if let Some((dr, df)) = colinear_step(a, b) {
                let mut rank = (a / 8) as i32 + dr;
                let mut file = (a % 8) as i32 + df;
                while (rank * 8 + file) as usize != b {
                    mask |= 1u64 << (rank * 8 + file);
                    rank += dr;
                    file += df;
                }
            }
            table[a][b] = mask;
        }
    }
    table
});

/// `LINE[a][b]`: the full rank, file, or diagonal through `a` and `b`
/// when they are colinear, empty otherwise (and for `a == b`). A
/// pinned piece may only move within `LINE[king][piece]`.
static LINE: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for a in 0..64 {
        for b in 0..64 {
            let Some((dr, df)) = colinear_step(a, b) else {
                continue;
            };
            let mut mask = 0u64;
            for sign in [1, -1] {
                let mut rank = (a / 8) as i32;
                let mut file = (a % 8) as i32;
                while (0..8).contains(&rank) && (0..8).contains(&file) {
                    mask |= 1u64 << (rank * 8 + file);
                    rank += dr * sign;
                    file += df * sign;
                }
            }
            table[a][b] = mask;
        }
    }
    table
});

#[inline]
pub(crate) fn knight_moves(sq: usize) -> u64 {
    KNIGHT_MOVES[sq]
}

#[inline]
pub(crate) fn king_moves(sq: usize) -> u64 {
    KING_MOVES[sq]
}

#[inline]
pub(crate) fn pawn_attack_map(side: usize, sq: usize) -> u64 {
    PAWN_ATTACK_MAPS[side][sq]
}

#[inline]
pub(crate) fn between_raw(a: usize, b: usize) -> u64 {
    BETWEEN[a][b]
}

#[inline]
pub(crate) fn line_raw(a: usize, b: usize) -> u64 {
    LINE[a][b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_moves_from_corner_and_center() {
        // a1: b3 and c2
        assert_eq!(knight_moves(0), (1 << 17) | (1 << 10));
        // e4 has all eight targets
        assert_eq!(knight_moves(28).count_ones(), 8);
    }

    #[test]
    fn king_moves_counts() {
        assert_eq!(king_moves(0).count_ones(), 3);
        assert_eq!(king_moves(28).count_ones(), 8);
        assert_eq!(king_moves(7).count_ones(), 3);
    }

    #[test]
    fn pawn_attacks_directions() {
        // white pawn on e4 attacks d5 and f5
        assert_eq!(pawn_attack_map(0, 28), (1 << 35) | (1 << 37));
        // black pawn on e4 attacks d3 and f3
        assert_eq!(pawn_attack_map(1, 28), (1 << 19) | (1 << 21));
        // edge files produce a single attack
        assert_eq!(pawn_attack_map(0, 24).count_ones(), 1);
    }

    #[test]
    fn between_includes_far_endpoint() {
        // a1..a4 on a file: a2, a3 strictly between, plus a4
        assert_eq!(between_raw(0, 24), (1 << 8) | (1 << 16) | (1 << 24));
        // same square
        assert_eq!(between_raw(12, 12), 1 << 12);
        // knight-distance squares share no line: only the endpoint
        assert_eq!(between_raw(0, 17), 1 << 17);
    }

    #[test]
    fn line_spans_the_board() {
        // a1 and h8 are on the long diagonal, which has 8 squares
        assert_eq!(line_raw(0, 63).count_ones(), 8);
        assert_eq!(line_raw(0, 63) & (1 << 27), 1 << 27);
        // a1 and b3 are not colinear
        assert_eq!(line_raw(0, 17), 0);
        // a rank line contains both endpoints
        let rank = line_raw(8, 15);
        assert_eq!(rank, 0xFF00);
    }
}
