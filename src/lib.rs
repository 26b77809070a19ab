pub mod board;
pub mod engine;

pub use board::{find_best_move, Board, Color, GameState, Move, Piece, Square};
pub use engine::SearchJob;
