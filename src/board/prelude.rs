//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let mut state = GameState::new();
//! assert_eq!(state.legal_moves().len(), 20);
//! ```

pub use super::{
    find_best_move, search, BoardBuilder, Color, FenError, GameState, Move, MoveParseError,
    Piece, SearchParams, SearchResult, Square,
};
