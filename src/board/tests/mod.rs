//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Special positions, pins, checks and terminal states
//! - `search.rs` - Minimax and alpha-beta behavior
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{GameState, Move, Square};

/// Look up the legal move between two named squares.
pub(super) fn find_move(state: &mut GameState, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    state
        .find_legal_move(from, to)
        .unwrap_or_else(|| panic!("Expected move {from}{to} not found"))
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
