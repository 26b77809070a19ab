//! Precomputed jump destinations for knights and kings.
//!
//! Bit `i` of an entry is set when square index `i` (see [`Square::as_index`])
//! is one knight/king step away from the entry's square.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn step_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for sq in Square::all() {
        let mut mask = 0u64;
        for &(dr, dc) in deltas {
            if let Some(target) = sq.offset(dr, dc) {
                mask |= 1u64 << target.as_index();
            }
        }
        table[sq.as_index()] = mask;
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_table(&KING_DELTAS));

/// Squares encoded in `mask`, lowest index first.
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(idx))
    })
}
