//! Core chess types.
//!
//! - `Piece` and `Color` - piece species and colors
//! - `Square` - bounds-checked (row, col) board coordinate
//! - `Move` - a single ply with the pieces it involves

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
