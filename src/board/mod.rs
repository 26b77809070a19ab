//! Chess board representation and game logic.
//!
//! Uses an 8x8 mailbox grid of optional `(Color, Piece)` tokens. Move
//! generation covers ordinary piece movement with full check legality;
//! castling, en passant and promotion are not part of the rules.
//!
//! # Example
//! ```
//! use mailbox_chess::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod grid;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use eval::MATE_SCORE;
pub use grid::{Board, PieceToken};
pub use search::{find_best_move, search, SearchParams, SearchResult};
pub use state::GameState;
pub use types::{Color, Move, Piece, Square};
